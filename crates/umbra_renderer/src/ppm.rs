//! Plain-text PPM (P3) output.

use crate::renderer::ImageBuffer;
use std::io::{self, Write};

/// Write `image` as ASCII PPM: header lines, then one `R G B` line per pixel,
/// rows top to bottom, columns left to right.
pub fn write_ppm<W: Write>(image: &ImageBuffer, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for [r, g, b] in image.to_rgb() {
        writeln!(writer, "{} {} {}", r, g, b)?;
    }

    writer.flush()
}
