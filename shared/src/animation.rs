pub const COUNTER_DURATION_MS: u32 = 1200;
pub const COUNTER_STEPS: u32 = 40;

/// Count-up from zero to `target` in equal increments.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: f64,
    current: f64,
    increment: f64,
    done: bool,
}

impl CounterAnimation {
    pub fn new(target: f64) -> Self {
        Self::with_steps(target, COUNTER_STEPS)
    }

    pub fn with_steps(target: f64, steps: u32) -> Self {
        let steps = steps.max(1);
        Self {
            target,
            current: 0.0,
            increment: target / f64::from(steps),
            done: false,
        }
    }

    pub fn step_interval_ms(duration_ms: u32, steps: u32) -> u32 {
        duration_ms / steps.max(1)
    }

    /// Advances one tick and returns the text to show.
    pub fn tick(&mut self) -> String {
        if !self.done {
            self.current += self.increment;
            if self.current >= self.target {
                self.current = self.target;
                self.done = true;
            }
        }
        self.display()
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn display(&self) -> String {
        let rounded = self.current.round() as i64;
        if self.target >= 1000.0 {
            group_thousands(rounded)
        } else {
            rounded.to_string()
        }
    }
}

pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// First run of ASCII digits in a chart value label such as "12 routes".
pub fn leading_number(label: &str) -> Option<u32> {
    let start = label.find(|c: char| c.is_ascii_digit())?;
    let digits: String = label[start..].chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// Fill widths for chart rows relative to the largest value. Rows whose
/// label holds no number get `None`.
pub fn chart_fill_percents(labels: &[&str]) -> Vec<Option<f64>> {
    let values: Vec<_> = labels.iter().map(|label| leading_number(label)).collect();
    let max = values.iter().flatten().copied().max().unwrap_or(0);
    values.into_iter()
        .map(|value| value.map(|v| if max == 0 { 0.0 } else { f64::from(v) / f64::from(max) * 100.0 }))
        .collect()
}

pub fn toggle_label(open: bool) -> &'static str {
    if open { "Show less" } else { "Show more" }
}
