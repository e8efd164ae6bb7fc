use anyhow::Result;

pub fn handle(values: Vec<String>, label: &str) -> Result<()> {
    if values.is_empty() {
        println!("No {} recorded yet.", label);
        return Ok(());
    }

    for value in values {
        println!("{}", value);
    }
    Ok(())
}
