//! Browser registry and tab launching.
//!
//! Tabs are opened by spawning the browser executable with the URL as its
//! argument; every supported browser forwards that to a running instance as a
//! new tab. Id 0 hands the URL to the platform's default opener instead.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use crate::config::SearchConfig;
use crate::error::SearchError;

/// A known browser and where it is usually installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserSpec {
    pub id: u8,
    pub name: &'static str,
    linux: Option<&'static str>,
    macos: Option<&'static str>,
    windows: Option<&'static str>,
}

pub const SYSTEM_DEFAULT_ID: u8 = 0;

pub const BROWSERS: &[BrowserSpec] = &[
    BrowserSpec {
        id: SYSTEM_DEFAULT_ID,
        name: "System default",
        linux: None,
        macos: None,
        windows: None,
    },
    BrowserSpec {
        id: 1,
        name: "Chrome",
        linux: Some("/usr/bin/google-chrome"),
        macos: Some("/Applications/Google Chrome.app/Contents/MacOS/Google Chrome"),
        windows: Some("C:/Program Files/Google/Chrome/Application/chrome.exe"),
    },
    BrowserSpec {
        id: 2,
        name: "Firefox",
        linux: Some("/usr/bin/firefox"),
        macos: Some("/Applications/Firefox.app/Contents/MacOS/firefox"),
        windows: Some("C:/Program Files/Mozilla Firefox/firefox.exe"),
    },
    BrowserSpec {
        id: 3,
        name: "Brave",
        linux: Some("/usr/bin/brave-browser"),
        macos: Some("/Applications/Brave Browser.app/Contents/MacOS/Brave Browser"),
        windows: Some("C:/Program Files/BraveSoftware/Brave-Browser/Application/brave.exe"),
    },
];

pub fn lookup(id: u8) -> Option<&'static BrowserSpec> {
    BROWSERS.iter().find(|b| b.id == id)
}

impl BrowserSpec {
    pub fn is_system_default(&self) -> bool {
        self.id == SYSTEM_DEFAULT_ID
    }

    /// Default executable for the current OS, if one is defined.
    pub fn executable(&self) -> Option<&'static str> {
        if cfg!(target_os = "macos") {
            self.macos
        } else if cfg!(target_os = "windows") {
            self.windows
        } else {
            self.linux
        }
    }
}

/// Something that can open a URL in a new tab.
pub trait TabOpener {
    fn open_tab(&mut self, url: &str) -> Result<()>;

    /// Called after each batch of tabs.
    fn finish_batch(&mut self) {}
}

/// Opens tabs by spawning a process per URL.
#[derive(Debug)]
pub struct BrowserLauncher {
    name: String,
    program: PathBuf,
    leading_args: Vec<String>,
    /// Spawned launchers not yet reaped.
    children: Vec<Child>,
}

impl BrowserLauncher {
    /// The platform opener: `open` on macOS, `cmd /C start` on Windows, `xdg-open` elsewhere.
    pub fn system_default() -> Self {
        let (program, leading_args) = if cfg!(target_os = "macos") {
            ("open", Vec::new())
        } else if cfg!(target_os = "windows") {
            // `start` takes the first quoted argument as a window title.
            ("cmd", vec!["/C".to_string(), "start".to_string(), String::new()])
        } else {
            ("xdg-open", Vec::new())
        };
        Self {
            name: "System default".to_string(),
            program: PathBuf::from(program),
            leading_args,
            children: Vec::new(),
        }
    }

    /// Launcher for a registry browser. `override_path` replaces the registry
    /// executable; the resulting path must exist.
    pub fn for_browser(spec: &BrowserSpec, override_path: Option<&Path>) -> Result<Self, SearchError> {
        if spec.is_system_default() && override_path.is_none() {
            return Ok(Self::system_default());
        }
        let program = override_path
            .map(Path::to_path_buf)
            .or_else(|| spec.executable().map(PathBuf::from))
            .ok_or_else(|| SearchError::BrowserUnavailable {
                name: spec.name.to_string(),
                path: "(not defined for this OS)".to_string(),
            })?;
        if !program.exists() {
            return Err(SearchError::BrowserUnavailable {
                name: spec.name.to_string(),
                path: program.display().to_string(),
            });
        }
        Ok(Self {
            name: spec.name.to_string(),
            program,
            leading_args: Vec::new(),
            children: Vec::new(),
        })
    }

    /// Launcher for the configured browser; an unset browser means the system default.
    pub fn from_config(cfg: &SearchConfig) -> Result<Self, SearchError> {
        let id = cfg.browser_id.unwrap_or(SYSTEM_DEFAULT_ID);
        let spec = lookup(id).ok_or(SearchError::UnknownBrowser(id))?;
        Self::for_browser(spec, cfg.browser_path.as_deref())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reap launcher processes that have exited. Returns how many are still running.
    pub fn reap_exited(&mut self) -> usize {
        self.children.retain_mut(|child| match child.try_wait() {
            Ok(Some(status)) => {
                if !status.success() {
                    tracing::debug!(browser = %self.name, %status, "launcher exited with failure");
                }
                false
            }
            Ok(None) => true,
            Err(e) => {
                tracing::warn!(browser = %self.name, "could not poll launcher: {}", e);
                false
            }
        });
        self.children.len()
    }
}

impl TabOpener for BrowserLauncher {
    fn open_tab(&mut self, url: &str) -> Result<()> {
        let child = Command::new(&self.program)
            .args(&self.leading_args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("launch {} for {url}", self.program.display()))?;
        self.children.push(child);
        tracing::debug!(browser = %self.name, url, "opened tab");
        Ok(())
    }

    fn finish_batch(&mut self) {
        let running = self.reap_exited();
        if running > 0 {
            tracing::debug!(browser = %self.name, running, "launchers still running");
        }
    }
}
