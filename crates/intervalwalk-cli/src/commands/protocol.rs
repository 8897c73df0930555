use intervalwalk_core::Protocol;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let protocol = Protocol::walking();
    println!("{}", serde_json::to_string_pretty(&protocol)?);
    Ok(())
}
