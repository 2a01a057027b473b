use crate::{error::GateInError, utils::util::Result};
use flate2::read::MultiGzDecoder;
use std::{
    fs::File,
    io::{BufReader, Read as ioRead},
    path::Path,
};

/// Opens a dataset file, transparently decompressing `.gz`/`.gzip` files.
pub fn open_dataset_reader(path: &Path) -> Result<BufReader<Box<dyn ioRead>>> {
    fn is_gzipped(path: &Path) -> bool {
        let path_str = path.to_string_lossy().to_lowercase();
        path_str.ends_with(".gz") || path_str.ends_with(".gzip")
    }
    let file = File::open(path).map_err(|error| {
        crate::gatein_error!("Failed to open dataset {}: {error}", path.display())
    })?;
    if is_gzipped(path) {
        let gz_decoder = MultiGzDecoder::new(file);
        if gz_decoder.header().is_some() {
            Ok(BufReader::new(Box::new(gz_decoder)))
        } else {
            Err(GateInError::InvalidGzipHeader {
                path: path.to_path_buf(),
            })
        }
    } else {
        Ok(BufReader::new(Box::new(file)))
    }
}
