use std::io::{self, Write};
use xivenv_core::EnvironmentMap;

pub const SHEBANG: &str = "#!/bin/sh";

/// Wrap `value` in double quotes, escaping the quotes it contains.
///
/// Only `"` is escaped; `$`, backticks and backslashes are left for the
/// shell to interpret.
pub fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\\\""))
}

/// The line that starts the command, or `$SHELL` when there is none
fn command_line(command: &[String]) -> String {
    match command.split_first() {
        None => "$SHELL".to_string(),
        Some((program, [])) => program.clone(),
        Some((program, args)) => {
            let args: Vec<String> = args.iter().map(|arg| quote(arg)).collect();
            format!("{} {}", program, args.join(" "))
        }
    }
}

/// Write a POSIX shell script that recreates `env` and runs `command`
/// from `$WINEPREFIX/<drive_root>`.
pub fn write_script<W: Write + ?Sized>(
    out: &mut W,
    env: &EnvironmentMap,
    command: &[String],
    drive_root: &str,
) -> io::Result<()> {
    writeln!(out, "{}", SHEBANG)?;
    writeln!(out)?;
    for (key, value) in env {
        writeln!(out, "export {}={}", key, quote(value))?;
    }
    writeln!(out)?;
    writeln!(out, "cd $WINEPREFIX/{}", drive_root)?;
    writeln!(out, "{}", command_line(command))?;
    out.flush()
}

/// Render the script into a string, see [`write_script`].
pub fn render_script(env: &EnvironmentMap, command: &[String], drive_root: &str) -> io::Result<String> {
    let mut buf = Vec::new();
    write_script(&mut buf, env, command, drive_root)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("plain"), "\"plain\"");
        assert_eq!(quote("a\"b"), "\"a\\\"b\"");
        assert_eq!(quote(""), "\"\"");
    }

    #[test]
    fn test_render_script_reference_output() {
        let env: EnvironmentMap = [("FOO", "a\"b")].into_iter().collect();
        let script = render_script(&env, &args(&["run", "x y"]), "drive_c").unwrap();
        assert_eq!(
            script,
            "#!/bin/sh\n\nexport FOO=\"a\\\"b\"\n\ncd $WINEPREFIX/drive_c\nrun \"x y\"\n"
        );
    }

    #[test]
    fn test_render_script_without_command_uses_shell() {
        let env: EnvironmentMap = [("SHELL", "/bin/zsh")].into_iter().collect();
        let script = render_script(&env, &[], "drive_c").unwrap();
        assert!(script.ends_with("\ncd $WINEPREFIX/drive_c\n$SHELL\n"));
    }

    #[test]
    fn test_render_script_command_without_args() {
        let script = render_script(&EnvironmentMap::new(), &args(&["winecfg"]), "drive_c").unwrap();
        assert!(script.ends_with("\nwinecfg\n"));
        assert_eq!(script, "#!/bin/sh\n\n\ncd $WINEPREFIX/drive_c\nwinecfg\n");
    }

    #[test]
    fn test_render_script_exports_every_entry() {
        let env: EnvironmentMap = [
            ("WINEPREFIX", "/games/ffxiv"),
            ("DXVK_LOG_LEVEL", "none"),
            ("PATH", "/usr/bin:/bin"),
        ]
        .into_iter()
        .collect();
        let script = render_script(&env, &args(&["wine", "C:\\tool.exe", "say \"hi\""]), "drive_c").unwrap();
        let lines: Vec<&str> = script.lines().collect();

        assert_eq!(lines[0], "#!/bin/sh");
        assert_eq!(lines[1], "");
        let mut exports = lines[2..5].to_vec();
        exports.sort();
        assert_eq!(
            exports,
            vec![
                "export DXVK_LOG_LEVEL=\"none\"",
                "export PATH=\"/usr/bin:/bin\"",
                "export WINEPREFIX=\"/games/ffxiv\"",
            ]
        );
        assert_eq!(lines[5], "");
        assert_eq!(lines[6], "cd $WINEPREFIX/drive_c");
        assert_eq!(lines[7], "wine \"C:\\tool.exe\" \"say \\\"hi\\\"\"");
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn test_render_script_custom_drive_root() {
        let script = render_script(&EnvironmentMap::new(), &[], "drive_d").unwrap();
        assert!(script.contains("\ncd $WINEPREFIX/drive_d\n"));
    }
}
