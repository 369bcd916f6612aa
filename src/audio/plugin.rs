//! Audio plugin - background music and sound effects through kira.

use bevy::asset::AssetLoadFailedEvent;
use bevy::prelude::*;
use bevy_kira_audio::prelude::{
    Audio, AudioApp, AudioChannel, AudioControl, AudioPlugin as KiraAudioPlugin, AudioSource,
};

use crate::core::{GameState, PlaySound, SoundCue};

/// Channel the looping background track plays on.
#[derive(Resource)]
pub struct MusicChannel;

const MUSIC_VOLUME: f64 = 0.1;

/// Audio plugin - plays the simulation's sound requests.
pub struct AudioPlugin;

impl Plugin for AudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(KiraAudioPlugin)
            .add_audio_channel::<MusicChannel>()
            .add_systems(Startup, load_sounds)
            .add_systems(OnEnter(GameState::InGame), start_music)
            .add_systems(OnExit(GameState::InGame), stop_music)
            .add_systems(Update, report_missing_sounds)
            .add_systems(Update, play_sound_effects.run_if(in_state(GameState::InGame)));
    }
}

/// Handles for every sound the game plays.
#[derive(Resource)]
pub struct SoundLibrary {
    pub music: Handle<AudioSource>,
    pub coin: Handle<AudioSource>,
    pub jump: Handle<AudioSource>,
    pub death: Handle<AudioSource>,
    pub shoot: Handle<AudioSource>,
    pub hit: Handle<AudioSource>,
}

impl SoundLibrary {
    fn effect(&self, cue: SoundCue) -> Handle<AudioSource> {
        match cue {
            SoundCue::Coin => self.coin.clone(),
            SoundCue::Jump => self.jump.clone(),
            SoundCue::Death => self.death.clone(),
            SoundCue::Shoot => self.shoot.clone(),
            SoundCue::Hit => self.hit.clone(),
        }
    }
}

/// Playback volume of a cue.
pub fn cue_volume(cue: SoundCue) -> f64 {
    match cue {
        SoundCue::Coin => 1.2,
        SoundCue::Shoot => 0.1,
        _ => 1.0,
    }
}

const MUSIC_PATH: &str = "audio/music.wav";
const COIN_PATH: &str = "audio/coin.wav";
const JUMP_PATH: &str = "audio/jump.wav";
const DEATH_PATH: &str = "audio/death.wav";
const SHOOT_PATH: &str = "audio/shoot.wav";
const HIT_PATH: &str = "audio/hit.wav";

fn load_sounds(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(SoundLibrary {
        music: asset_server.load(MUSIC_PATH),
        coin: asset_server.load(COIN_PATH),
        jump: asset_server.load(JUMP_PATH),
        death: asset_server.load(DEATH_PATH),
        shoot: asset_server.load(SHOOT_PATH),
        hit: asset_server.load(HIT_PATH),
    });
}

fn report_missing_sounds(mut failures: EventReader<AssetLoadFailedEvent<AudioSource>>) {
    for failure in failures.read() {
        warn!("Sound {} could not be loaded: {}", failure.path, failure.error);
    }
}

fn start_music(music: Res<AudioChannel<MusicChannel>>, sounds: Res<SoundLibrary>) {
    music
        .play(sounds.music.clone())
        .looped()
        .with_volume(MUSIC_VOLUME);
}

fn stop_music(music: Res<AudioChannel<MusicChannel>>) {
    music.stop();
}

fn play_sound_effects(
    audio: Res<Audio>,
    sounds: Res<SoundLibrary>,
    mut requests: EventReader<PlaySound>,
) {
    for PlaySound(cue) in requests.read() {
        audio.play(sounds.effect(*cue)).with_volume(cue_volume(*cue));
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn shots_are_quiet_and_skulls_loud() {
        assert_eq!(cue_volume(SoundCue::Shoot), 0.1);
        assert_eq!(cue_volume(SoundCue::Coin), 1.2);
        assert_eq!(cue_volume(SoundCue::Hit), 1.0);
    }

    #[test]
    fn every_sound_ships_with_the_game() {
        let assets = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
        for path in [MUSIC_PATH, COIN_PATH, JUMP_PATH, DEATH_PATH, SHOOT_PATH, HIT_PATH] {
            assert!(assets.join(path).is_file(), "missing {path}");
        }
    }
}
