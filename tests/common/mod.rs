//! Shared fixture catalog for integration tests.

#![allow(dead_code)]

use indoc::indoc;
use ssd_explorer::Catalog;

pub const FIXTURE_JSON: &str = indoc! {r#"
    [
      {
        "brand": "Samsung",
        "model": "970 EVO",
        "interface": "PCIe 3.0 x4",
        "capacities": "250GB / 500GB / 1TB / 2TB",
        "controller": "Samsung Phoenix",
        "nand_type": "TLC",
        "rw_speed": "3500/3300",
        "categories": "Mid-range",
        "product_page": "https://example.com/970evo"
      },
      {
        "brand": "Inland",
        "model": "Premium",
        "interface": "PCIe 3.0 x4",
        "capacities": "256GB / 512GB / 1TB",
        "controller": "Phison E12 (970-class)",
        "nand_type": "TLC",
        "rw_speed": "3100/2800",
        "categories": "Budget",
        "product_page": "https://example.com/inland"
      },
      {
        "brand": "Crucial",
        "model": "MX500",
        "interface": "SATA",
        "capacities": "250GB / 500GB / 1TB / 2TB / 4TB",
        "controller": "Silicon Motion SM2258",
        "nand_type": "TLC",
        "rw_speed": "560/530",
        "categories": "Budget",
        "product_page": "https://example.com/mx500"
      },
      {
        "brand": "Samsung",
        "model": "870 QVO",
        "interface": "SATA",
        "capacities": "1TB / 2TB / 4TB / 8TB",
        "controller": "Samsung MKX",
        "nand_type": "QLC",
        "rw_speed": "560/530",
        "categories": "Budget",
        "product_page": "https://example.com/870qvo"
      },
      {
        "brand": "WD",
        "model": "Black SN850X",
        "interface": "PCIe 4.0 x4",
        "capacities": "1TB / 2TB / 4TB",
        "controller": null,
        "nand_type": null,
        "rw_speed": null,
        "categories": "High-end",
        "notes": "Heatsink optional",
        "product_page": "https://example.com/sn850x"
      },
      {
        "brand": "Teamgroup",
        "model": "MP33",
        "interface": "PCIe 3.0 x4",
        "capacities": "128GB / 256GB",
        "controller": "Phison E13T",
        "nand_type": "TLC",
        "rw_speed": "1800/1500",
        "categories": null,
        "product_page": ""
      }
    ]
"#};

pub fn fixture() -> Catalog {
    Catalog::from_json_str(FIXTURE_JSON).expect("fixture catalog is valid")
}
