pub struct Fact {
    pub target: u32,
    pub label: &'static str,
}

pub struct ChartRow {
    pub day: &'static str,
    pub value: &'static str,
}

pub struct Argument {
    pub title: &'static str,
    pub summary: &'static str,
    pub details: &'static str,
}

pub const FACTS: &[Fact] = &[
    Fact { target: 14, label: "Weekday routes" },
    Fact { target: 6, label: "Sunday routes" },
    Fact { target: 30000, label: "Students on campus" },
    Fact { target: 40, label: "Minutes between weekend buses" },
];

pub const CHART_ROWS: &[ChartRow] = &[
    ChartRow { day: "Weekday", value: "14 routes" },
    ChartRow { day: "Saturday", value: "8 routes" },
    ChartRow { day: "Sunday", value: "6 routes" },
];

pub const ARGUMENTS: &[Argument] = &[
    Argument {
        title: "Weekend jobs start early",
        summary: "Many students work Saturday and Sunday morning shifts.",
        details: "Service that begins mid-morning leaves early shift workers walking or paying for rides. \
                  Earlier first trips would cover most retail and dining shifts in town.",
    },
    Argument {
        title: "Evenings matter too",
        summary: "Weekend buses stop before most events end.",
        details: "Concerts, games and late study sessions regularly run past the last weekend trip. \
                  Extending service by even an hour would get most riders home.",
    },
    Argument {
        title: "Waiting is the real cost",
        summary: "Long gaps between buses make short trips impractical.",
        details: "When the next bus is forty minutes away, a ten minute ride turns into an hour. \
                  Higher frequency on the busiest routes would help more riders than new coverage.",
    },
];
