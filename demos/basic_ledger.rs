//! Basic ledger validation and analytics example

use cpf_ledger_core::{
    balances_by_account, min_max_for_account, top_averages, top_balances, validate_entry,
    EntrySubmission, LedgerEntry,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧾 CPF Ledger Core - Basic Example\n");

    // 1. Validate raw submissions as they arrive
    println!("✅ Validating submissions...");
    let submissions = vec![
        EntrySubmission::new("11144477735", "1250.00"),
        EntrySubmission::new("12345678909", "980.50"),
        EntrySubmission::new("11144477735", "-320.75"),
        EntrySubmission::new("52998224725", "4000"),
        EntrySubmission::new("12345678909", "150"),
        // A bad one: short CPF and an amount above the accepted range
        EntrySubmission::new("123", "20000"),
    ];

    let mut entries: Vec<LedgerEntry> = Vec::new();
    for submission in submissions {
        let result = validate_entry(&submission);
        if result.is_valid() {
            let entry = LedgerEntry::try_from(submission)?;
            println!("  ✓ Accepted: {} / {}", entry.cpf, entry.amount);
            entries.push(entry);
        } else {
            println!("  ✗ Rejected:");
            for message in result.messages() {
                println!("      - {}", message);
            }
        }
    }
    println!();

    // 2. Per-account balances in order of first appearance
    println!("📊 Balances by account:");
    for balance in balances_by_account(&entries) {
        println!("  {} → {}", balance.cpf, balance.amount);
    }
    println!();

    // 3. Extreme transactions for one account
    println!("↕️  Min/max for 11144477735:");
    for extreme in min_max_for_account("11144477735", &entries) {
        println!("  {}", extreme.amount);
    }
    println!();

    // 4. Rankings
    println!("🏆 Top balances:");
    for (rank, balance) in top_balances(&entries).iter().enumerate() {
        println!("  {}. {} → {}", rank + 1, balance.cpf, balance.amount);
    }
    println!();

    println!("📈 Top average transaction values:");
    for (rank, average) in top_averages(&entries).iter().enumerate() {
        println!("  {}. {} → {}", rank + 1, average.cpf, average.amount);
    }

    Ok(())
}
