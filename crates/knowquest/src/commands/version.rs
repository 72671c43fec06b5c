pub fn run() -> anyhow::Result<()> {
    println!("knowquest {}", env!("CARGO_PKG_VERSION"));
    println!("Object hunts and learning-style recommendations");
    Ok(())
}
