fn main() -> Result<(), Box<dyn std::error::Error>> {
    hackpod::runtime::run()?;
    Ok(())
}
