mod intent;
mod keydown;

pub use intent::{resolve_intent, DialogIntent, IntentMarker};
pub use keydown::{
    decode_keydown, resolve_dialog_key, DialogKeyAction, KeyContext, KeyEvent, KeyTarget,
};
