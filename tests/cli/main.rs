use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod generate;

const BIN_NAME: &str = "langjs";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A project with translations in the default `lang/` directory.
    pub fn with_translations() -> Result<Self> {
        let test = Self::new()?;
        test.write_file(".git/HEAD", "ref: refs/heads/main\n")?;
        test.write_file(
            "lang/en/messages.json",
            r#"{"welcome": "Welcome", "home": {"title": "gm8ft2hrrlq1u6m54we9udi"}}"#,
        )?;
        test.write_file(
            "lang/en/validation.json",
            r#"{"required": "The :attribute field is required."}"#,
        )?;
        test.write_file("lang/en/forum/thread.json", r#"{"title": "T"}"#)?;
        test.write_file(
            "lang/en/vendor/nonameinc/messages.json",
            r#"{"hello": "Hello from the package"}"#,
        )?;
        test.write_file("lang/es/messages.json", r#"{"welcome": "Bienvenido"}"#)?;
        test.write_file(
            "lang/vendor/nonameinc/es/messages.json",
            r#"{"hello": "Hola desde el paquete"}"#,
        )?;
        test.write_file("lang/ht/messages.toml", "welcome = \"Byenvini\"\n")?;
        test.write_file("lang/en/README.md", "Translations for the app.\n")?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
