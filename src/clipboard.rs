use copypasta_ext::prelude::*;

use crate::errors::ClipboardError;
use crate::password::Password;

/// Copies `password` to the system clipboard. The x11/wayland "bin" contexts
/// keep the contents available after this process exits.
pub fn copy_password(password: &Password) -> Result<(), ClipboardError> {
    let mut ctx = copypasta_ext::try_context().ok_or(ClipboardError::Unavailable)?;

    write_contents(ctx.as_mut(), password.as_str())
}

fn write_contents<C: ClipboardProvider + ?Sized>(ctx: &mut C, text: &str) -> Result<(), ClipboardError> {
    ctx.set_contents(text.to_string())
        .map_err(|e| ClipboardError::Write(e.to_string()))
}
