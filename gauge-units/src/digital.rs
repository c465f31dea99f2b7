//! Digital storage (base: byte) and data transfer rate (base: bit per second)

use gauge_core::{SubCategory, Unit, UnitCategory};

const KIB: f64 = 1024.0;

pub fn digital_storage() -> UnitCategory {
    UnitCategory::new("digital_storage", "Digital Storage")
        .with_base_unit("byte")
        .with_subcategory(SubCategory::new("decimal", "Decimal (SI)", vec![
            Unit::new("bit", "bit", "b", 0.125).plural("bits"),
            Unit::base("byte", "byte", "B").plural("bytes").aliases(&["octet"]),
            Unit::new("kilobyte", "kilobyte", "kB", 1e3).plural("kilobytes").aliases(&["KB"]),
            Unit::new("megabyte", "megabyte", "MB", 1e6).plural("megabytes"),
            Unit::new("gigabyte", "gigabyte", "GB", 1e9).plural("gigabytes").aliases(&["gig"]),
            Unit::new("terabyte", "terabyte", "TB", 1e12).plural("terabytes"),
            Unit::new("petabyte", "petabyte", "PB", 1e15).plural("petabytes"),
        ]))
        .with_subcategory(SubCategory::new("binary", "Binary (IEC)", vec![
            Unit::new("kibibyte", "kibibyte", "KiB", KIB).plural("kibibytes"),
            Unit::new("mebibyte", "mebibyte", "MiB", KIB * KIB).plural("mebibytes"),
            Unit::new("gibibyte", "gibibyte", "GiB", KIB * KIB * KIB).plural("gibibytes"),
            Unit::new("tebibyte", "tebibyte", "TiB", KIB * KIB * KIB * KIB).plural("tebibytes"),
        ]))
        .with_popular(&["byte", "kilobyte", "megabyte", "gigabyte", "terabyte"])
}

pub fn data_transfer_rate() -> UnitCategory {
    UnitCategory::new("data_transfer_rate", "Data Transfer Rate")
        .with_base_unit("bit_per_second")
        .with_units(vec![
            Unit::base("bit_per_second", "bit per second", "bps").plural("bits per second").aliases(&["bit/s"]),
            Unit::new("kilobit_per_second", "kilobit per second", "kbps", 1e3).plural("kilobits per second").aliases(&["kbit/s"]),
            Unit::new("megabit_per_second", "megabit per second", "Mbps", 1e6).plural("megabits per second").aliases(&["Mbit/s"]),
            Unit::new("gigabit_per_second", "gigabit per second", "Gbps", 1e9).plural("gigabits per second").aliases(&["Gbit/s"]),
            Unit::new("byte_per_second", "byte per second", "B/s", 8.0).plural("bytes per second"),
            Unit::new("kilobyte_per_second", "kilobyte per second", "kB/s", 8e3).plural("kilobytes per second"),
            Unit::new("megabyte_per_second", "megabyte per second", "MB/s", 8e6).plural("megabytes per second"),
        ])
        .with_popular(&["megabit_per_second", "megabyte_per_second", "gigabit_per_second"])
}
