use std::path::Path;

use crate::Error;

/// Reads every value of a named variable from a NetCDF file.
///
/// The file is opened read-only and the handle is dropped as soon as
/// the values are in memory. Values are widened to f64 regardless of
/// the stored width.
pub fn read_series(path: &Path, name: &str) -> Result<Vec<f64>, Error> {
    let file = netcdf::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let var = file
        .variable(name)
        .ok_or_else(|| Error::MissingVariable(name.to_string()))?;
    let values = var.get_values::<f64, _>(..).map_err(|source| Error::Read {
        name: name.to_string(),
        source,
    })?;
    log::debug!("read {} samples of `{}`", values.len(), name);
    Ok(values)
}
