/// Placeholder shown when there is no previous value to compare against
pub const NO_DELTA: &str = "(—)";

/// Up/down indicator pair appended to a non-zero delta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeltaEmoji {
    pub up: &'static str,
    pub down: &'static str,
}

impl DeltaEmoji {
    pub const PRICE: DeltaEmoji = DeltaEmoji {
        up: "📈",
        down: "📉",
    };

    pub const VOLUME: DeltaEmoji = DeltaEmoji {
        up: "🔼",
        down: "🔽",
    };
}

// Percentage change from old to new, 0 when old is 0
pub fn percent_change(new: f64, old: f64) -> f64 {
    if old == 0.0 {
        0.0
    } else {
        (new - old) / old * 100.0
    }
}

// Format the change between two values, e.g. "(+25.00% 📈)"
pub fn format_delta(new: f64, old: Option<f64>, emoji: DeltaEmoji) -> String {
    let old = match old {
        Some(old) => old,
        None => return NO_DELTA.to_string(),
    };

    let perc = percent_change(new, old);

    if new > old {
        format!("(+{:.2}% {})", perc, emoji.up)
    } else if new < old {
        format!("(-{:.2}% {})", perc.abs(), emoji.down)
    } else {
        "(0.00%)".to_string()
    }
}

// Format a dollar amount with B/M/K suffix scaling
pub fn format_number(n: f64) -> String {
    if n >= 1_000_000_000.0 {
        format!("${:.2}B", n / 1_000_000_000.0)
    } else if n >= 1_000_000.0 {
        format!("${:.2}M", n / 1_000_000.0)
    } else if n >= 1_000.0 {
        format!("${:.2}K", n / 1_000.0)
    } else {
        format!("${:.2}", n)
    }
}
