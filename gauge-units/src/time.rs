//! Time units (base: second)

use gauge_core::{Unit, UnitCategory};

pub fn time() -> UnitCategory {
    UnitCategory::new("time", "Time")
        .with_base_unit("second")
        .with_units(vec![
            Unit::new("nanosecond", "nanosecond", "ns", 1e-9).plural("nanoseconds"),
            Unit::new("microsecond", "microsecond", "µs", 1e-6).plural("microseconds").aliases(&["us"]),
            Unit::new("millisecond", "millisecond", "ms", 0.001).plural("milliseconds"),
            Unit::base("second", "second", "s").plural("seconds").aliases(&["sec", "secs"]),
            Unit::new("minute", "minute", "min", 60.0).plural("minutes").aliases(&["mins"]),
            Unit::new("hour", "hour", "h", 3600.0).plural("hours").aliases(&["hr", "hrs"]),
            Unit::new("day", "day", "d", 86_400.0).plural("days"),
            Unit::new("week", "week", "wk", 604_800.0).plural("weeks"),
            Unit::new("month", "month", "mo", 2_629_746.0).plural("months"),
            Unit::new("year", "year", "yr", 31_556_952.0).plural("years").aliases(&["annum"]),
            Unit::new("decade", "decade", "dec", 315_569_520.0).plural("decades"),
            Unit::new("century", "century", "c", 3_155_695_200.0).plural("centuries"),
        ])
        .with_popular(&["second", "minute", "hour", "day", "week", "year"])
}
