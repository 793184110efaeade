
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

fn solve<R: BufRead, W: Write>(scan: &mut Scanner<R>, out: &mut W) -> Result<(), ScanError> {
    let _ = (scan, out);
    Ok(())
}

const INPUT: &str = $INFILE_LIT;
const OUTPUT: &str = $OUTFILE_LIT;

fn main() -> Result<(), ScanError> {
    let mut scan = Scanner::new(BufReader::new(File::open(INPUT)?));
    let mut out = BufWriter::new(File::create(OUTPUT)?);
    solve(&mut scan, &mut out)?;
    out.flush()?;
    Ok(())
}
