use miette::Result;

fn main() -> Result<()> {
    paginate::cli::run()?;
    Ok(())
}
