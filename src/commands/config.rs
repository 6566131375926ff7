//! Configuration file editor command.
//!
//! Opens the yastt configuration file in the user's preferred editor, writing
//! the default template first if the file does not exist yet.

use std::process::Command;

/// Editors tried, in order, when neither $VISUAL nor $EDITOR is set
const FALLBACK_EDITORS: &[&str] = &["nano", "vi"];

/// Opens the configuration file in an editor and waits for it to exit.
///
/// # Errors
/// - If the config file cannot be located or created
/// - If no editor can be found or it exits unsuccessfully
pub fn handle_config() -> anyhow::Result<()> {
    let config_path = crate::config::get_config_path()?;
    crate::setup::ensure_config(&config_path)?;

    let editor = find_editor(|name| std::env::var(name).ok(), is_editor_available)?;
    tracing::info!("Opening {} with {}", config_path.display(), editor);

    let (program, args) = split_editor(&editor)?;
    let status = Command::new(program)
        .args(args)
        .arg(&config_path)
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to launch editor '{editor}': {e}"))?;

    if !status.success() {
        return Err(anyhow::anyhow!(
            "Editor exited with error code: {}",
            status.code().unwrap_or(-1)
        ));
    }

    Ok(())
}

/// Picks $VISUAL, then $EDITOR, then the first installed fallback.
fn find_editor(
    env: impl Fn(&str) -> Option<String>,
    installed: impl Fn(&str) -> bool,
) -> anyhow::Result<String> {
    if let Some(editor) = ["VISUAL", "EDITOR"]
        .into_iter()
        .filter_map(|name| env(name))
        .find(|value| !value.trim().is_empty())
    {
        return Ok(editor);
    }

    FALLBACK_EDITORS
        .iter()
        .find(|name| installed(name))
        .map(|name| name.to_string())
        .ok_or_else(|| anyhow::anyhow!("No editor found. Please set the $EDITOR environment variable."))
}

/// Splits an editor setting such as `code -w` into program and arguments.
fn split_editor(editor: &str) -> anyhow::Result<(&str, Vec<&str>)> {
    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| anyhow::anyhow!("Editor command is empty"))?;
    Ok((program, parts.collect()))
}

fn is_editor_available(editor: &str) -> bool {
    Command::new("which")
        .arg(editor)
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visual_wins_over_editor() {
        let editor = find_editor(
            |name| match name {
                "VISUAL" => Some("code -w".into()),
                "EDITOR" => Some("vim".into()),
                _ => None,
            },
            |_| true,
        )
        .unwrap();
        assert_eq!(editor, "code -w");
    }

    #[test]
    fn test_blank_env_falls_back_to_installed_editor() {
        let editor = find_editor(|_| Some(String::new()), |name| name == "vi").unwrap();
        assert_eq!(editor, "vi");
    }

    #[test]
    fn test_split_editor_with_flags() {
        let (program, args) = split_editor("code -w").unwrap();
        assert_eq!(program, "code");
        assert_eq!(args, vec!["-w"]);

        let (program, args) = split_editor("  vim  ").unwrap();
        assert_eq!(program, "vim");
        assert!(args.is_empty());

        assert!(split_editor("   ").is_err());
    }

    #[test]
    fn test_no_editor_found() {
        assert!(find_editor(|_| None, |_| false).is_err());
    }
}
