use super::traits::FrameFile;
use crate::core::error::ValidationError;
use crate::core::models::frame::Frame;
use itertools::Itertools;
use nalgebra::{Matrix3, Point3};
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

const DEFAULT_IPI_BEAD: u64 = 10;

#[derive(Debug, Error)]
pub enum XyzError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid frame: {0}")]
    Validation(#[from] ValidationError),
}

/// Extended XYZ with the cell in a `Lattice='...'` comment line.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtXyzFile;

/// i-PI XYZ with `CELL(abcABC)` cell parameters, step, and bead index in the comment line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IpiXyzFile {
    pub step: u64,
    pub bead: u64,
}

impl Default for IpiXyzFile {
    fn default() -> Self {
        Self {
            step: 0,
            bead: DEFAULT_IPI_BEAD,
        }
    }
}

impl FrameFile for ExtXyzFile {
    type Error = XyzError;

    fn write_to(&self, frame: &Frame, writer: &mut impl Write) -> Result<(), Self::Error> {
        let cell = frame.cell();
        let lattice = (0..3)
            .flat_map(|i| (0..3).map(move |j| cell[(i, j)]))
            .map(format_shortest)
            .join(" ");

        writeln!(writer, "{}", frame.len())?;
        writeln!(writer, "Lattice='{}'", lattice)?;
        write_atom_lines(frame, writer)?;
        Ok(())
    }
}

impl FrameFile for IpiXyzFile {
    type Error = XyzError;

    fn write_to(&self, frame: &Frame, writer: &mut impl Write) -> Result<(), Self::Error> {
        let cell_params = frame
            .cell_parameters()
            .to_array()
            .iter()
            .map(|p| format!("{:11.5}", p))
            .join(" ");

        writeln!(writer, "{}", frame.len())?;
        writeln!(
            writer,
            "# CELL(abcABC):{}  cell{{angstrom}}  Traj: positions{{angstrom}} Step: {:>11}  Bead: {:7}",
            cell_params, self.step, self.bead
        )?;
        write_atom_lines(frame, writer)?;
        Ok(())
    }
}

/// Writes `frame` as both `<stem>.extxyz` and `<stem>.xyz` (i-PI, step 0, bead 10).
pub fn write_frame<P: AsRef<Path>>(stem: P, frame: &Frame) -> Result<(), XyzError> {
    let stem = stem.as_ref();
    let extxyz_path = with_suffix(stem, ".extxyz");
    let ipi_path = with_suffix(stem, ".xyz");

    ExtXyzFile.write_to_path(frame, &extxyz_path)?;
    IpiXyzFile::default().write_to_path(frame, &ipi_path)?;

    debug!(
        atoms = frame.len(),
        "Wrote {:?} and {:?}.", extxyz_path, ipi_path
    );
    Ok(())
}

/// Validates positions against symbols, then writes both XYZ flavours like [`write_frame`].
pub fn write_xyz<P, S>(
    stem: P,
    positions: &[Point3<f64>],
    symbols: &[S],
    cell: &Matrix3<f64>,
) -> Result<(), XyzError>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let frame = Frame::new(
        positions.to_vec(),
        symbols.iter().map(|s| s.as_ref().to_string()),
        *cell,
    )?;
    write_frame(stem, &frame)
}

fn with_suffix(stem: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(stem.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

fn write_atom_lines(frame: &Frame, writer: &mut impl Write) -> io::Result<()> {
    for (symbol, position) in frame.atoms() {
        let coords = position
            .coords
            .iter()
            .map(|&x| format!("{:>12}", format_scientific(x, 5)))
            .join(" ");
        writeln!(writer, "{:>8} {}", symbol, coords)?;
    }
    Ok(())
}

/// Scientific notation with a signed, at least two-digit exponent (`1.00000e+00`).
fn format_scientific(value: f64, precision: usize) -> String {
    let formatted = format!("{:.*e}", precision, value);
    normalize_exponent(formatted)
}

/// Shortest round-trip representation, with exponents written as `e+16` / `e-05`.
fn format_shortest(value: f64) -> String {
    normalize_exponent(format!("{:?}", value))
}

fn normalize_exponent(formatted: String) -> String {
    let Some((mantissa, exponent)) = formatted.split_once('e') else {
        return formatted;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return formatted;
    };
    format!("{}e{:+03}", mantissa, exponent)
}
