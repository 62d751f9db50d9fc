use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::{Serialize, de::DeserializeOwned};

/// Destination for JSON results
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonTarget {
    Stdout,
    File(PathBuf),
}

impl JsonTarget {
    pub fn from_output_path(output_path: Option<PathBuf>) -> Self {
        output_path.map_or(JsonTarget::Stdout, JsonTarget::File)
    }

    pub fn write<T>(&self, value: &T) -> anyhow::Result<()>
    where
        T: Serialize,
    {
        match self {
            JsonTarget::Stdout => write_pretty_json(&mut io::stdout().lock(), value, "stdout"),
            JsonTarget::File(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                let mut writer = BufWriter::new(file);
                write_pretty_json(&mut writer, value, &path.display().to_string())?;
                tracing::info!(path = %path.display(), "result written");
                Ok(())
            }
        }
    }
}

fn write_pretty_json<W, T>(writer: &mut W, value: &T, target: &str) -> anyhow::Result<()>
where
    W: Write,
    T: Serialize,
{
    serde_json::to_writer_pretty(&mut *writer, value)
        .with_context(|| format!("Failed to write JSON to {target}"))?;
    writeln!(writer).with_context(|| format!("Failed to write newline to {target}"))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush output to {target}"))
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {file_kind} file: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse {file_kind} JSON file: {}", path.display()))
}
