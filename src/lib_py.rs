use std::path::PathBuf;
use std::sync::LazyLock;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::{Charset, OnUnknown, Unidecode};

/// Shared engine behind the module-level `unidecode` function.
static ASCII: LazyLock<Unidecode> = LazyLock::new(Unidecode::to_ascii);

fn config_err(err: crate::Error) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Transliterator bound to one charset.
///
/// Parameters
/// ----------
/// charset : str
///     "ASCII" (default), "ISO-8859-2" or "LATIN-2".
/// on_unknown : Optional[str]
///     "sentinel" (emit "[?]", default) or "drop".
/// tables_dir : Optional[str]
///     Directory of X%03x table files searched before the built-in tables.
#[pyclass(name = "Unidecode", module = "unidecode_charset", frozen)]
struct PyUnidecode {
    inner: Unidecode,
}

#[pymethods]
impl PyUnidecode {
    #[new]
    #[pyo3(signature = (charset="ASCII", on_unknown=None, tables_dir=None))]
    fn new(charset: &str, on_unknown: Option<&str>, tables_dir: Option<PathBuf>) -> PyResult<Self> {
        let charset: Charset = charset.parse().map_err(config_err)?;
        let mut builder = Unidecode::builder(charset);
        if let Some(policy) = on_unknown {
            builder = builder.on_unknown(policy.parse::<OnUnknown>().map_err(config_err)?);
        }
        if let Some(dir) = tables_dir {
            builder = builder.tables_dir(dir);
        }
        Ok(Self {
            inner: builder.build(),
        })
    }

    /// Transliterates `string`; None yields "".
    #[pyo3(signature = (string=None))]
    fn decode(&self, string: Option<&str>) -> String {
        self.inner.decode(string)
    }

    /// Initials of the transliterated `string`; None yields "".
    #[pyo3(signature = (string=None))]
    fn to_initials(&self, string: Option<&str>) -> String {
        self.inner.to_initials(string)
    }
}

/// Transliterates a Unicode string to ASCII.
#[pyfunction(signature = (string=None), text_signature = "(string)")]
fn unidecode(string: Option<&str>) -> String {
    ASCII.decode(string)
}

#[pymodule]
fn unidecode_charset(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyUnidecode>()?;
    m.add_function(wrap_pyfunction!(unidecode, m)?)?;
    m.add("UNKNOWN_CHAR", crate::UNKNOWN_CHAR)?;
    let version = env!("CARGO_PKG_VERSION");
    m.setattr("__version__", version)?;
    Ok(())
}
