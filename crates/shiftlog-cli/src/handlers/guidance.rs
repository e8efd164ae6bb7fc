pub fn handle() {
    println!("shiftlog - work session duration analyzer\n");
    println!("Quick commands:");
    println!("  shiftlog add -e NAME -p PRODUCT --start \"2024-03-01 09:00\" --end \"2024-03-01 10:30\"");
    println!("  shiftlog record list                # View recorded sessions");
    println!("  shiftlog stats                      # Per-employee mean/stddev");
    println!("  shiftlog stats --chart              # ...with a stddev bar chart");
    println!("  shiftlog record export -o out.csv   # CSV export\n");
    println!("For more commands:");
    println!("  shiftlog --help");
}
