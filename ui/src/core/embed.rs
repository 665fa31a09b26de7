//! YouTube iframe embed: player URLs and the postMessage command protocol.

use serde::Serialize;
use url::Url;

use crate::core::encode_json;
use crate::i18n::Language;

const EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// Delay between the frame's `load` event and the listening handshake.
pub const HANDSHAKE_DELAY_MS: u32 = 1_000;

/// Intro video shown on the landing section, one per language.
pub fn intro_video_id(language: Language) -> &'static str {
    match language {
        Language::En => "Pc-Nx79lrPU",
        Language::Es => "GOLlW847Ixk",
    }
}

/// Autoplaying, muted, looping embed with the JS API enabled.
pub fn embed_url(video_id: &str, origin: Option<&str>) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(EMBED_BASE)?.join(video_id)?;
    {
        let mut query = url.query_pairs_mut();
        query
            .append_pair("autoplay", "1")
            .append_pair("mute", "1")
            .append_pair("loop", "1")
            .append_pair("playlist", video_id)
            .append_pair("controls", "0")
            .append_pair("showinfo", "0")
            .append_pair("rel", "0")
            .append_pair("enablejsapi", "1");
        if let Some(origin) = origin {
            query.append_pair("origin", origin);
        }
    }
    Ok(url)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    Play,
    Pause,
    Mute,
    UnMute,
}

impl PlayerCommand {
    pub fn func(self) -> &'static str {
        match self {
            PlayerCommand::Play => "playVideo",
            PlayerCommand::Pause => "pauseVideo",
            PlayerCommand::Mute => "mute",
            PlayerCommand::UnMute => "unMute",
        }
    }

    /// Command that flips the current playback state.
    pub fn toggle_playback(playing: bool) -> Self {
        if playing {
            PlayerCommand::Pause
        } else {
            PlayerCommand::Play
        }
    }

    pub fn toggle_sound(muted: bool) -> Self {
        if muted {
            PlayerCommand::UnMute
        } else {
            PlayerCommand::Mute
        }
    }
}

/// Messages posted into the player frame.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum PlayerMessage {
    Listening { id: String },
    Command { func: &'static str, args: Vec<String> },
}

impl PlayerMessage {
    pub fn listening(id: &str) -> Self {
        PlayerMessage::Listening { id: id.to_string() }
    }

    pub fn command(command: PlayerCommand) -> Self {
        PlayerMessage::Command {
            func: command.func(),
            args: Vec::new(),
        }
    }

    pub fn to_json(&self) -> Option<String> {
        encode_json(self, "player message")
    }
}
