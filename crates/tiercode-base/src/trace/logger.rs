use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{filter, fmt, Registry};

// keeps the file writer flushing until the process exits
static FILE_GUARD: OnceCell<WorkerGuard> = OnceCell::new();

/// Where the logs go and at what levels. Built from `RUST_LOG` and the `-d` flag, installed
/// once with [`LoggingSystem::init`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "struct unused - invoke init()"]
pub struct LoggingSystem {
    logfile: Option<PathBuf>,
    levels:  String,
}

impl Default for LoggingSystem {
    fn default() -> Self {
        Self {
            logfile: None,
            levels:  "error".to_string(),
        }
    }
}

impl LoggingSystem {
    pub fn from_env() -> Result<Self> {
        let env = std::env::var("RUST_LOG").unwrap_or_default();
        Self::parse(&env)
    }

    /// examples:
    ///   ""  (no file logging, and stderr = error)
    ///   warn
    ///   tiercode=warn
    ///   logfile.txt:warn
    ///   :warn  (no file logging)
    ///   /tmp/logfile.txt:tiercode=info,warn
    ///   /tmp/logfile.txt  (stderr = error)
    ///   :tiercode_base::descriptor=trace  (module paths need the leading ':')
    pub fn parse(s: &str) -> Result<Self> {
        if s.contains(|ch: char| ch.is_whitespace() || !ch.is_ascii()) {
            anyhow::bail!("bad logging directives '{s}'");
        }
        let (logfile, levels) = match s.split_once(':') {
            _ if s.is_empty() => return Ok(Self::default()),
            Some((lf, lvls)) => (Some(lf), lvls),
            None if s.contains(['/', '.']) => (Some(s), ""),
            None => (None, s),
        };
        if let Some(lf) = logfile {
            if lf.contains('=') {
                anyhow::bail!("bad logfile in logging directives '{s}'");
            }
        }
        let levels = match levels {
            "" => "error",
            lvls => lvls,
        };
        levels
            .parse::<filter::Targets>()
            .with_context(|| format!("bad logging directives '{s}'"))?;
        Ok(Self {
            logfile: logfile.filter(|lf| !lf.is_empty()).map(PathBuf::from),
            levels:  levels.to_string(),
        })
    }

    /// -d sets the default level to debug, -dd to trace. Target directives are kept.
    pub fn with_verbosity(self, debug: u8) -> Self {
        let level = match debug {
            0 => return self,
            1 => "debug",
            _ => "trace",
        };
        let levels = std::iter::once(level)
            .chain(self.levels.split(',').filter(|d| d.contains('=')))
            .collect::<Vec<_>>()
            .join(",");
        Self { levels, ..self }
    }

    /// installs the global subscriber - fails if one is already set
    pub fn init(self) -> Result<()> {
        let targets = self.levels.parse::<filter::Targets>()?;
        let file_layer = self.logfile.as_deref().map(|lf| {
            let dir = lf.parent().filter(|d| !d.as_os_str().is_empty()).unwrap_or(Path::new("."));
            let name = lf.file_name().unwrap_or(lf.as_os_str());
            let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
            let _ = FILE_GUARD.set(guard);
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(writer)
                .with_thread_names(true)
        });
        let stderr_layer = fmt::layer().with_writer(io::stderr).without_time().with_target(false);
        Registry::default()
            .with(file_layer)
            .with(stderr_layer)
            .with(targets)
            .try_init()
            .context("installing logging subscriber")?;
        debug!("logging initialised {self:?}");
        Ok(())
    }
}
