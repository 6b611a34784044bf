use crate::action::OutputSink;
use crate::context::RunnerContext;
use crate::error::Result;
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// A workspace directory with a `_temp` directory for rendered output.
pub(crate) struct TestWorkspace {
    pub(crate) dir: TempDir,
}

impl TestWorkspace {
    pub(crate) fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("_temp")).unwrap();
        Self { dir }
    }

    pub(crate) fn root(&self) -> &Path {
        self.dir.path()
    }

    pub(crate) fn temp_dir(&self) -> PathBuf {
        self.dir.path().join("_temp")
    }

    /// Write a task definition at `relative` inside the workspace.
    pub(crate) fn write_task_definition(&self, relative: &str, document: &Value) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, serde_json::to_string_pretty(document).unwrap()).unwrap();
        path
    }

    pub(crate) fn context(&self) -> RunnerContext {
        RunnerContext {
            workspace: Some(self.root().to_path_buf()),
            temp_dir: self.temp_dir(),
            output_file: None,
            debug: false,
        }
    }

    /// Files currently in the `_temp` directory.
    pub(crate) fn rendered_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = std::fs::read_dir(self.temp_dir())
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .collect();
        files.sort();
        files
    }
}

/// A two-container task definition in the shape the deploy tooling emits.
pub(crate) fn sample_task_definition() -> Value {
    json!({
        "family": "web-service",
        "taskRoleArn": "arn:aws:iam::123456789012:role/web",
        "networkMode": "awsvpc",
        "containerDefinitions": [
            {
                "name": "web",
                "image": "registry.example.com/web:old",
                "essential": true,
                "portMappings": [{ "containerPort": 8080, "protocol": "tcp" }],
                "environment": [
                    { "name": "LOG_LEVEL", "value": "info" },
                    { "name": "REGION", "value": "us-east-1" }
                ]
            },
            {
                "name": "log-router",
                "image": "amazon/aws-for-fluent-bit:stable",
                "essential": false
            }
        ],
        "cpu": "256",
        "memory": "512"
    })
}

/// Output sink that records what was reported.
#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    pub(crate) outputs: Vec<(String, String)>,
    pub(crate) failures: Vec<String>,
}

impl OutputSink for RecordingSink {
    fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        self.outputs.push((name.to_string(), value.to_string()));
        Ok(())
    }

    fn set_failed(&mut self, message: &str) {
        self.failures.push(message.to_string());
    }
}
