
use std::io::{BufWriter, Write};

fn solve<R: BufRead, W: Write>(scan: &mut Scanner<R>, out: &mut W) -> Result<(), ScanError> {
    let _ = (scan, out);
    Ok(())
}

fn main() -> Result<(), ScanError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut scan = Scanner::new(stdin.lock());
    let mut out = BufWriter::new(stdout.lock());
    solve(&mut scan, &mut out)?;
    out.flush()?;
    Ok(())
}
