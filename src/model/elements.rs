/// Static element reference table, periods 1-4 (Z = 1..=36).
/// Neutron counts follow the usual classroom convention:
/// round(standard atomic weight) - Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementData {
    pub z: u32,
    pub symbol: &'static str,
    pub name: &'static str,
    pub neutrons: u32,
    pub category: &'static str,
}

pub const ELEMENTS: &[ElementData] = &[
    // --- Period 1 ---
    ElementData { z: 1,  symbol: "H",  name: "Hydrogen",   neutrons: 0,  category: "Nonmetal" },
    ElementData { z: 2,  symbol: "He", name: "Helium",     neutrons: 2,  category: "Noble Gas" },
    // --- Period 2 ---
    ElementData { z: 3,  symbol: "Li", name: "Lithium",    neutrons: 4,  category: "Alkali Metal" },
    ElementData { z: 4,  symbol: "Be", name: "Beryllium",  neutrons: 5,  category: "Alkaline Earth" },
    ElementData { z: 5,  symbol: "B",  name: "Boron",      neutrons: 6,  category: "Metalloid" },
    ElementData { z: 6,  symbol: "C",  name: "Carbon",     neutrons: 6,  category: "Nonmetal" },
    ElementData { z: 7,  symbol: "N",  name: "Nitrogen",   neutrons: 7,  category: "Nonmetal" },
    ElementData { z: 8,  symbol: "O",  name: "Oxygen",     neutrons: 8,  category: "Nonmetal" },
    ElementData { z: 9,  symbol: "F",  name: "Fluorine",   neutrons: 10, category: "Halogen" },
    ElementData { z: 10, symbol: "Ne", name: "Neon",       neutrons: 10, category: "Noble Gas" },
    // --- Period 3 ---
    ElementData { z: 11, symbol: "Na", name: "Sodium",     neutrons: 12, category: "Alkali Metal" },
    ElementData { z: 12, symbol: "Mg", name: "Magnesium",  neutrons: 12, category: "Alkaline Earth" },
    ElementData { z: 13, symbol: "Al", name: "Aluminium",  neutrons: 14, category: "Post-transition Metal" },
    ElementData { z: 14, symbol: "Si", name: "Silicon",    neutrons: 14, category: "Metalloid" },
    ElementData { z: 15, symbol: "P",  name: "Phosphorus", neutrons: 16, category: "Nonmetal" },
    ElementData { z: 16, symbol: "S",  name: "Sulfur",     neutrons: 16, category: "Nonmetal" },
    ElementData { z: 17, symbol: "Cl", name: "Chlorine",   neutrons: 18, category: "Halogen" },
    ElementData { z: 18, symbol: "Ar", name: "Argon",      neutrons: 22, category: "Noble Gas" },
    // --- Period 4 ---
    ElementData { z: 19, symbol: "K",  name: "Potassium",  neutrons: 20, category: "Alkali Metal" },
    ElementData { z: 20, symbol: "Ca", name: "Calcium",    neutrons: 20, category: "Alkaline Earth" },
    ElementData { z: 21, symbol: "Sc", name: "Scandium",   neutrons: 24, category: "Transition Metal" },
    ElementData { z: 22, symbol: "Ti", name: "Titanium",   neutrons: 26, category: "Transition Metal" },
    ElementData { z: 23, symbol: "V",  name: "Vanadium",   neutrons: 28, category: "Transition Metal" },
    ElementData { z: 24, symbol: "Cr", name: "Chromium",   neutrons: 28, category: "Transition Metal" },
    ElementData { z: 25, symbol: "Mn", name: "Manganese",  neutrons: 30, category: "Transition Metal" },
    ElementData { z: 26, symbol: "Fe", name: "Iron",       neutrons: 30, category: "Transition Metal" },
    ElementData { z: 27, symbol: "Co", name: "Cobalt",     neutrons: 32, category: "Transition Metal" },
    ElementData { z: 28, symbol: "Ni", name: "Nickel",     neutrons: 31, category: "Transition Metal" },
    ElementData { z: 29, symbol: "Cu", name: "Copper",     neutrons: 35, category: "Transition Metal" },
    ElementData { z: 30, symbol: "Zn", name: "Zinc",       neutrons: 35, category: "Transition Metal" },
    ElementData { z: 31, symbol: "Ga", name: "Gallium",    neutrons: 39, category: "Post-transition Metal" },
    ElementData { z: 32, symbol: "Ge", name: "Germanium",  neutrons: 41, category: "Metalloid" },
    ElementData { z: 33, symbol: "As", name: "Arsenic",    neutrons: 42, category: "Metalloid" },
    ElementData { z: 34, symbol: "Se", name: "Selenium",   neutrons: 45, category: "Nonmetal" },
    ElementData { z: 35, symbol: "Br", name: "Bromine",    neutrons: 45, category: "Halogen" },
    ElementData { z: 36, symbol: "Kr", name: "Krypton",    neutrons: 48, category: "Noble Gas" },
];

pub fn by_atomic_number(z: u32) -> Option<&'static ElementData> {
    ELEMENTS.iter().find(|e| e.z == z)
}

/// Sidebar search: case-insensitive match on name or symbol, or an exact
/// atomic number. An empty term returns the full table.
pub fn search(term: &str) -> Vec<&'static ElementData> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return ELEMENTS.iter().collect();
    }
    ELEMENTS
        .iter()
        .filter(|e| {
            e.name.to_lowercase().contains(&term)
                || e.symbol.to_lowercase().contains(&term)
                || e.z.to_string() == term
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_carbon() {
        let c = by_atomic_number(6).unwrap();
        assert_eq!(c.symbol, "C");
        assert_eq!(c.name, "Carbon");
        assert_eq!(c.neutrons, 6);
    }

    #[test]
    fn test_lookup_out_of_range() {
        assert!(by_atomic_number(0).is_none());
        assert!(by_atomic_number(37).is_none());
    }

    #[test]
    fn test_table_is_ordered_and_complete() {
        assert_eq!(ELEMENTS.len(), 36);
        for (i, e) in ELEMENTS.iter().enumerate() {
            assert_eq!(e.z, i as u32 + 1);
        }
    }

    #[test]
    fn test_search_by_symbol_and_number() {
        let hits = search("fe");
        assert!(hits.iter().any(|e| e.symbol == "Fe"));
        let hits = search("8");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].symbol, "O");
    }

    #[test]
    fn test_search_empty_returns_all() {
        assert_eq!(search("").len(), ELEMENTS.len());
        assert_eq!(search("  ").len(), ELEMENTS.len());
    }
}
