//! Hook settings file generation (`--init`).
//!
//! Writes `.claude/settings.local.json` in the current directory, registering
//! a `Stop` hook that re-invokes gatecheck with the chosen flags and
//! commands. When no commands are given on the command line, an interactive
//! wizard collects them from stdin.

use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::Args;
use crate::error::{GatecheckError, Result};

/// A single hook invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hook {
    /// Hook kind, always `"command"` for generated entries.
    #[serde(rename = "type")]
    pub hook_type: String,
    /// Command line the editor runs.
    pub command: String,
}

/// A matcher with its hooks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookItem {
    pub matcher: String,
    pub hooks: Vec<Hook>,
}

/// Hook groups, keyed by event name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HookSection {
    #[serde(rename = "Stop", default)]
    pub stop: Vec<HookItem>,
}

/// Top-level shape of the generated settings file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    pub hooks: HookSection,
}

impl Settings {
    /// Settings registering `command` as the sole Stop hook.
    pub fn for_command(command: String) -> Self {
        Self {
            hooks: HookSection {
                stop: vec![HookItem {
                    matcher: String::new(),
                    hooks: vec![Hook {
                        hook_type: "command".to_string(),
                        command,
                    }],
                }],
            },
        }
    }
}

/// What the generated hook command should run.
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    pub commands: Vec<String>,
    pub message: Option<String>,
    pub include_stdout: bool,
    pub stdout_filter: Option<String>,
    pub stderr_filter: Option<String>,
    pub suppress_stderr: bool,
}

impl InitOptions {
    /// Build options from parsed command-line arguments.
    pub fn from_args(args: &Args) -> Self {
        Self {
            commands: args.commands.clone(),
            message: args.message.clone(),
            include_stdout: args.stdout,
            stdout_filter: args.stdout_filter.clone(),
            stderr_filter: args.stderr_filter.clone(),
            suppress_stderr: args.no_stderr,
        }
    }
}

/// Generate the settings file in the current directory.
///
/// Prompts on stdin when `opts.commands` is empty and prints the created
/// path, with the home directory abbreviated to `~`.
pub fn init_settings(opts: InitOptions) -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let path = init_settings_in(&current_dir, opts, &mut std::io::stdin().lock())?;
    println!(
        "Successfully created settings.local.json at {}",
        display_path(&path)
    );
    Ok(())
}

/// Generate the settings file under `dir`, reading wizard input from `input`.
///
/// The existence check runs before any prompting so an aborted wizard never
/// leaves state behind; the `.claude` directory is created only after all
/// input has been validated. Returns the path of the created file.
pub fn init_settings_in(
    dir: &Path,
    mut opts: InitOptions,
    input: &mut impl BufRead,
) -> Result<PathBuf> {
    let claude_dir = dir.join(".claude");
    let settings_path = claude_dir.join("settings.local.json");

    if settings_path.exists() {
        return Err(GatecheckError::SettingsExists(settings_path));
    }

    if opts.commands.is_empty() {
        opts = prompt_options(input, opts)?;
    }

    fs::create_dir_all(&claude_dir)?;

    let settings = Settings::for_command(build_command_string(&opts));
    let json = serde_json::to_string_pretty(&settings)?;
    write_settings(&settings_path, &json)?;

    Ok(settings_path)
}

/// Run the interactive wizard, filling in `base` from `input`.
fn prompt_options(input: &mut impl BufRead, base: InitOptions) -> Result<InitOptions> {
    let include_stdout = ask_yes_no(input, "Include stdout in error output? (y/N): ")?;
    let stdout_filter = ask_filter(input, "stdout")?;
    let stderr_filter = ask_filter(input, "stderr")?;
    let suppress_stderr = ask_yes_no(input, "Exclude stderr from error output? (y/N): ")?;

    println!("Enter commands to run (one per line, empty line to finish):");
    let commands = read_commands(input)?;

    Ok(InitOptions {
        commands,
        include_stdout,
        stdout_filter,
        stderr_filter,
        suppress_stderr,
        ..base
    })
}

fn ask_yes_no(input: &mut impl BufRead, prompt: &str) -> Result<bool> {
    print!("{prompt}");
    std::io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }
    let response = line.trim().to_ascii_lowercase();
    Ok(response == "y" || response == "yes")
}

fn ask_filter(input: &mut impl BufRead, kind: &str) -> Result<Option<String>> {
    if !ask_yes_no(input, &format!("Add {kind} filter? (y/N): "))? {
        return Ok(None);
    }

    print!("Enter {kind} filter command: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let filter = line.trim().to_string();
    Ok((!filter.is_empty()).then_some(filter))
}

/// Read commands one per line until an empty line or EOF.
fn read_commands(input: &mut impl BufRead) -> Result<Vec<String>> {
    let mut commands = Vec::new();
    let mut line = String::new();

    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let command = line.trim();
        if command.is_empty() {
            break;
        }
        commands.push(command.to_string());
    }

    if commands.is_empty() {
        return Err(GatecheckError::NoCommands);
    }
    Ok(commands)
}

/// Render the gatecheck invocation the hook will run.
///
/// Only flags that deviate from defaults are emitted; each command is
/// single-quoted so the hook shell passes it through as one argument.
fn build_command_string(opts: &InitOptions) -> String {
    let mut command = String::from("gatecheck");

    if let Some(ref message) = opts.message {
        if !message.is_empty() {
            command.push_str(&format!(" --message \"{message}\""));
        }
    }
    if opts.include_stdout {
        command.push_str(" --stdout");
    }
    if let Some(ref filter) = opts.stdout_filter {
        command.push_str(&format!(" --stdout-filter \"{filter}\""));
    }
    if let Some(ref filter) = opts.stderr_filter {
        command.push_str(&format!(" --stderr-filter \"{filter}\""));
    }
    if opts.suppress_stderr {
        command.push_str(" --no-stderr");
    }
    for cmd in &opts.commands {
        command.push_str(&format!(" '{cmd}'"));
    }

    command
}

fn write_settings(path: &Path, json: &str) -> Result<()> {
    fs::write(path, json)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    }
    Ok(())
}

fn display_path(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(rest) = path.strip_prefix(&home) {
            return format!("~/{}", rest.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn no_input() -> Cursor<&'static [u8]> {
        Cursor::new(b"" as &[u8])
    }

    #[test]
    fn test_build_command_string_minimal() {
        let opts = InitOptions {
            commands: vec!["npm run lint".to_string()],
            ..Default::default()
        };
        assert_eq!(build_command_string(&opts), "gatecheck 'npm run lint'");
    }

    #[test]
    fn test_build_command_string_all_flags() {
        let opts = InitOptions {
            commands: vec!["npm test".to_string(), "npm run lint".to_string()],
            message: Some("checks failed".to_string()),
            include_stdout: true,
            stdout_filter: Some("grep -v noise".to_string()),
            stderr_filter: Some("head -n 5".to_string()),
            suppress_stderr: true,
        };

        assert_eq!(
            build_command_string(&opts),
            "gatecheck --message \"checks failed\" --stdout \
             --stdout-filter \"grep -v noise\" --stderr-filter \"head -n 5\" \
             --no-stderr 'npm test' 'npm run lint'"
        );
    }

    #[test]
    fn test_settings_json_shape() {
        let settings = Settings::for_command("gatecheck 'true'".to_string());
        let json = serde_json::to_value(&settings).unwrap();

        let hook = &json["hooks"]["Stop"][0];
        assert_eq!(hook["matcher"], "");
        assert_eq!(hook["hooks"][0]["type"], "command");
        assert_eq!(hook["hooks"][0]["command"], "gatecheck 'true'");
    }

    #[test]
    fn test_read_commands_until_blank_line() {
        let mut input = Cursor::new(b"npm test\nnpm run lint\n\nignored\n" as &[u8]);
        let commands = read_commands(&mut input).unwrap();
        assert_eq!(commands, vec!["npm test", "npm run lint"]);
    }

    #[test]
    fn test_read_commands_empty_is_error() {
        let mut input = Cursor::new(b"\n" as &[u8]);
        assert!(matches!(
            read_commands(&mut input),
            Err(GatecheckError::NoCommands)
        ));
    }

    #[test]
    fn test_ask_yes_no() {
        let mut input = Cursor::new(b"y\nYES\nn\n\n" as &[u8]);
        assert!(ask_yes_no(&mut input, "? ").unwrap());
        assert!(ask_yes_no(&mut input, "? ").unwrap());
        assert!(!ask_yes_no(&mut input, "? ").unwrap());
        assert!(!ask_yes_no(&mut input, "? ").unwrap());
    }

    #[test]
    fn test_wizard_full_session() {
        // stdout? yes; stdout filter? yes + command; stderr filter? no;
        // exclude stderr? no; then two commands.
        let mut input =
            Cursor::new(b"y\ny\ngrep -v noise\nn\nn\nnpm test\nnpm run lint\n\n" as &[u8]);
        let opts = prompt_options(&mut input, InitOptions::default()).unwrap();

        assert!(opts.include_stdout);
        assert_eq!(opts.stdout_filter, Some("grep -v noise".to_string()));
        assert!(opts.stderr_filter.is_none());
        assert!(!opts.suppress_stderr);
        assert_eq!(opts.commands, vec!["npm test", "npm run lint"]);
    }

    #[test]
    fn test_init_creates_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let opts = InitOptions {
            commands: vec!["cargo clippy".to_string()],
            ..Default::default()
        };

        let path = init_settings_in(dir.path(), opts, &mut no_input()).unwrap();
        assert!(path.ends_with(".claude/settings.local.json"));

        let settings: Settings =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            settings.hooks.stop[0].hooks[0].command,
            "gatecheck 'cargo clippy'"
        );
    }

    #[test]
    fn test_init_refuses_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let opts = InitOptions {
            commands: vec!["true".to_string()],
            ..Default::default()
        };

        init_settings_in(dir.path(), opts.clone(), &mut no_input()).unwrap();
        let err = init_settings_in(dir.path(), opts, &mut no_input()).unwrap_err();
        assert!(matches!(err, GatecheckError::SettingsExists(_)));
    }

    #[test]
    fn test_init_wizard_abort_leaves_nothing_behind() {
        let dir = tempfile::tempdir().unwrap();
        // No commands anywhere: wizard reads EOF for every prompt.
        let err = init_settings_in(dir.path(), InitOptions::default(), &mut no_input());
        assert!(matches!(err, Err(GatecheckError::NoCommands)));
        assert!(!dir.path().join(".claude").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_init_file_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let opts = InitOptions {
            commands: vec!["true".to_string()],
            ..Default::default()
        };

        let path = init_settings_in(dir.path(), opts, &mut no_input()).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
