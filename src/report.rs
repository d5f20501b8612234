use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::rc::Rc;

use crate::clock::TimeSource;
use crate::error::{ReportError, Result};
use crate::record::{CategoryRow, HEADER};

pub struct ReportGenerator {
    clock: Rc<dyn TimeSource>,
}

impl ReportGenerator {
    pub fn new(clock: Rc<dyn TimeSource>) -> Self {
        Self { clock }
    }

    /// Writes the report skeleton for `user_name` to `output_path`,
    /// truncating whatever was there. A failed write may leave a partial file.
    pub fn generate<S, P>(&self, user_name: &str, categories: &[S], output_path: P) -> Result<()>
    where
        S: AsRef<str>,
        P: AsRef<Path>,
    {
        let path = output_path.as_ref();
        let generated_at = self.clock.now_formatted();

        write_file(path, user_name, &generated_at, categories)?;

        tracing::info!(
            path = %path.display(),
            rows = categories.len(),
            "report written"
        );

        println!("Planilha gerada com sucesso: {}", path.display());

        Ok(())
    }
}

// The file is closed when this returns, on success or error.
fn write_file<S>(path: &Path, user_name: &str, generated_at: &str, categories: &[S]) -> Result<()>
where
    S: AsRef<str>,
{
    let file = File::create(path).map_err(|source| ReportError::CannotCreateFile {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), "writing report");

    let mut out = BufWriter::new(file);

    write_report(&mut out, user_name, generated_at, categories)
        .and_then(|_| out.flush())
        .map_err(|source| ReportError::CannotWriteFile {
            path: path.to_path_buf(),
            source,
        })
}

fn write_report<W, S>(
    out: &mut W,
    user_name: &str,
    generated_at: &str,
    categories: &[S],
) -> std::io::Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    writeln!(out, "Relatório Financeiro - {}", user_name)?;
    writeln!(out, "Data de geração: {}", generated_at)?;
    writeln!(out, "{}", HEADER)?;

    for category in categories {
        writeln!(
            out,
            "{}",
            CategoryRow {
                category: category.as_ref(),
            }
        )?;
    }

    Ok(())
}
