use clap::Parser;

/// Report a score event to Quboo.
#[derive(Parser, Debug)]
#[command(
    name = "quboo",
    about = "Report release, documentation, and generic score events to Quboo",
    version,
    after_help = "Examples:\n  \
        quboo release \"Backend release\"\n  \
        quboo 50 \"Helping a buddy\"\n\n\
        Credentials come from QUBOO_ACCESS_KEY and QUBOO_SECRET_KEY."
)]
pub struct Cli {
    /// Score category: `release`, `doc`, or a numeric score for the generic
    /// category
    pub type_or_score: String,

    /// Human-readable description of the scored event
    pub description: String,
}
