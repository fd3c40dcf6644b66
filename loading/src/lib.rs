mod resources;

use {
    crate::resources::{DialogueFolderHandle, HintsFolderHandle},
    bevy::{asset::LoadedFolder, platform::collections::HashMap, prelude::*},
    dialogue_assets::{DialogueAssetsPlugin, DialogueDefinition, DialogueLibrary},
    hint_assets::{HintAssetsPlugin, HintSetDefinition},
    hint_resources::HintLibrary,
    states::{GameState, LoadingPhase},
};

pub struct LoadingManagerPlugin;

impl Plugin for LoadingManagerPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((HintAssetsPlugin, DialogueAssetsPlugin))
            .init_resource::<LoadingStatus>()
            .init_resource::<HintLibrary>()
            .init_resource::<DialogueLibrary>()
            .init_state::<LoadingPhase>()
            // Phase: Assets
            .add_systems(Startup, (load_hint_sets, load_dialogues))
            .add_systems(
                Update,
                check_assets_loaded
                    .run_if(in_state(GameState::Loading).and(in_state(LoadingPhase::Assets))),
            )
            // Phase: BuildLibraries
            .add_systems(OnEnter(LoadingPhase::BuildLibraries), build_libraries)
            // Phase: Ready
            .add_systems(OnEnter(LoadingPhase::Ready), finish_loading)
            // Loading UI
            .add_systems(OnEnter(GameState::Loading), setup_loading_ui)
            .add_systems(
                Update,
                update_loading_ui.run_if(in_state(GameState::Loading)),
            )
            .add_systems(OnExit(GameState::Loading), cleanup_loading_ui);
    }
}

#[derive(Resource, Default)]
pub struct LoadingStatus {
    pub current_phase: String,
    pub detail: String,
}

// --- Phase: Assets ---

fn load_hint_sets(mut cmd: Commands, asset_server: Res<AssetServer>) {
    info!("started loading hint sets");
    let handle = asset_server.load_folder("hints");
    cmd.insert_resource(HintsFolderHandle(handle));
}

fn load_dialogues(mut cmd: Commands, asset_server: Res<AssetServer>) {
    info!("started loading dialogues");
    let handle = asset_server.load_folder("dialogue");
    cmd.insert_resource(DialogueFolderHandle(handle));
}

fn check_assets_loaded(
    mut next_phase: ResMut<NextState<LoadingPhase>>,
    mut status: ResMut<LoadingStatus>,
    asset_server: Res<AssetServer>,
    hints: Res<HintsFolderHandle>,
    dialogues: Res<DialogueFolderHandle>,
) {
    status.current_phase = "Loading Assets".into();
    status.detail = "Reading hints and dialogue...".into();

    if asset_server.is_loaded_with_dependencies(hints.0.id())
        && asset_server.is_loaded_with_dependencies(dialogues.0.id())
    {
        info!("assets loaded");
        next_phase.set(LoadingPhase::BuildLibraries);
    }
}

// --- Phase: BuildLibraries ---

/// Indexes typed handles by a name read from the asset itself. Later duplicates
/// are skipped with a warning.
pub fn index_by_name<A: Asset>(
    handles: impl IntoIterator<Item = Handle<A>>,
    assets: &Assets<A>,
    name_of: impl Fn(&A) -> &str,
) -> HashMap<String, Handle<A>> {
    let mut index = HashMap::new();
    for handle in handles {
        let Some(asset) = assets.get(&handle) else {
            continue;
        };
        let name = name_of(asset);
        if index.contains_key(name) {
            warn!(%name, "duplicate asset name, keeping the first one");
            continue;
        }
        debug!(%name, "indexed asset");
        index.insert(name.to_string(), handle);
    }
    index
}

fn typed_handles<A: Asset>(folder: Option<&LoadedFolder>) -> Vec<Handle<A>> {
    folder
        .map(|folder| {
            folder
                .handles
                .iter()
                .cloned()
                .filter_map(|handle| handle.try_typed::<A>().ok())
                .collect()
        })
        .unwrap_or_default()
}

fn build_libraries(
    mut next_phase: ResMut<NextState<LoadingPhase>>,
    mut status: ResMut<LoadingStatus>,
    folders: Res<Assets<LoadedFolder>>,
    hints_folder: Res<HintsFolderHandle>,
    dialogue_folder: Res<DialogueFolderHandle>,
    hint_sets: Res<Assets<HintSetDefinition>>,
    dialogues: Res<Assets<DialogueDefinition>>,
    mut hint_library: ResMut<HintLibrary>,
    mut dialogue_library: ResMut<DialogueLibrary>,
) {
    status.current_phase = "Building Libraries".into();
    status.detail = "Indexing levels...".into();

    hint_library.sets = index_by_name(
        typed_handles(folders.get(hints_folder.0.id())),
        &hint_sets,
        |set| set.level_name.as_str(),
    );
    dialogue_library.dialogues = index_by_name(
        typed_handles(folders.get(dialogue_folder.0.id())),
        &dialogues,
        |dialogue| dialogue.name.as_str(),
    );
    info!(
        hint_sets = hint_library.sets.len(),
        dialogues = dialogue_library.dialogues.len(),
        "libraries built"
    );

    next_phase.set(LoadingPhase::Ready);
}

// --- Phase: Ready ---

fn finish_loading(mut next_state: ResMut<NextState<GameState>>) {
    info!("loading complete, transitioning to Running");
    next_state.set(GameState::Running);
}

// --- Loading UI ---

#[derive(Component)]
struct LoadingUi;

fn setup_loading_ui(mut commands: Commands) {
    commands.spawn((
        Text::new("Loading..."),
        TextFont {
            font_size: 32.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(20.0),
            right: Val::Px(20.0),
            ..default()
        },
        LoadingUi,
    ));
}

fn update_loading_ui(status: Res<LoadingStatus>, mut query: Query<&mut Text, With<LoadingUi>>) {
    if !status.is_changed() {
        return;
    }
    if let Ok(mut text) = query.single_mut() {
        text.0 = format!("Loading...\n{}\n{}", status.current_phase, status.detail);
    }
}

fn cleanup_loading_ui(mut commands: Commands, query: Query<Entity, With<LoadingUi>>) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}
