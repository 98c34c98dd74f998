//! The alias command: shell aliases binding the query into fzf
//!
//! `fn` reloads the comment-mode query as you type; `fp` does the same in
//! change-directory mode and evaluates the selected line, so picking a
//! project drops you into it.

use dotlog_core::error::{DotlogError, Result};

pub fn handle() -> Result<()> {
    let exe = std::env::current_exe()?;
    let exe = exe
        .to_str()
        .ok_or_else(|| DotlogError::Other("executable path is not valid UTF-8".to_string()))?;

    println!(
        r#"alias fn='fzf --bind "change:reload(eval {exe} find {{q}})"'"#
    );
    println!(
        r#"alias fp='eval "$(fzf --bind "change:reload(eval {exe} find {{q}} S)")"'"#
    );
    Ok(())
}
