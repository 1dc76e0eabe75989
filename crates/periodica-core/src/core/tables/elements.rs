//! Names and symbols of the 118 named elements.

/// Identity of a named element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementInfo {
    pub atomic_number: u32,
    pub symbol: &'static str,
    pub name: &'static str,
}

#[rustfmt::skip]
pub static ELEMENTS: [ElementInfo; 118] = [
    ElementInfo { atomic_number: 1, symbol: "H", name: "Hydrogen" },
    ElementInfo { atomic_number: 2, symbol: "He", name: "Helium" },
    ElementInfo { atomic_number: 3, symbol: "Li", name: "Lithium" },
    ElementInfo { atomic_number: 4, symbol: "Be", name: "Beryllium" },
    ElementInfo { atomic_number: 5, symbol: "B", name: "Boron" },
    ElementInfo { atomic_number: 6, symbol: "C", name: "Carbon" },
    ElementInfo { atomic_number: 7, symbol: "N", name: "Nitrogen" },
    ElementInfo { atomic_number: 8, symbol: "O", name: "Oxygen" },
    ElementInfo { atomic_number: 9, symbol: "F", name: "Fluorine" },
    ElementInfo { atomic_number: 10, symbol: "Ne", name: "Neon" },
    ElementInfo { atomic_number: 11, symbol: "Na", name: "Sodium" },
    ElementInfo { atomic_number: 12, symbol: "Mg", name: "Magnesium" },
    ElementInfo { atomic_number: 13, symbol: "Al", name: "Aluminum" },
    ElementInfo { atomic_number: 14, symbol: "Si", name: "Silicon" },
    ElementInfo { atomic_number: 15, symbol: "P", name: "Phosphorus" },
    ElementInfo { atomic_number: 16, symbol: "S", name: "Sulfur" },
    ElementInfo { atomic_number: 17, symbol: "Cl", name: "Chlorine" },
    ElementInfo { atomic_number: 18, symbol: "Ar", name: "Argon" },
    ElementInfo { atomic_number: 19, symbol: "K", name: "Potassium" },
    ElementInfo { atomic_number: 20, symbol: "Ca", name: "Calcium" },
    ElementInfo { atomic_number: 21, symbol: "Sc", name: "Scandium" },
    ElementInfo { atomic_number: 22, symbol: "Ti", name: "Titanium" },
    ElementInfo { atomic_number: 23, symbol: "V", name: "Vanadium" },
    ElementInfo { atomic_number: 24, symbol: "Cr", name: "Chromium" },
    ElementInfo { atomic_number: 25, symbol: "Mn", name: "Manganese" },
    ElementInfo { atomic_number: 26, symbol: "Fe", name: "Iron" },
    ElementInfo { atomic_number: 27, symbol: "Co", name: "Cobalt" },
    ElementInfo { atomic_number: 28, symbol: "Ni", name: "Nickel" },
    ElementInfo { atomic_number: 29, symbol: "Cu", name: "Copper" },
    ElementInfo { atomic_number: 30, symbol: "Zn", name: "Zinc" },
    ElementInfo { atomic_number: 31, symbol: "Ga", name: "Gallium" },
    ElementInfo { atomic_number: 32, symbol: "Ge", name: "Germanium" },
    ElementInfo { atomic_number: 33, symbol: "As", name: "Arsenic" },
    ElementInfo { atomic_number: 34, symbol: "Se", name: "Selenium" },
    ElementInfo { atomic_number: 35, symbol: "Br", name: "Bromine" },
    ElementInfo { atomic_number: 36, symbol: "Kr", name: "Krypton" },
    ElementInfo { atomic_number: 37, symbol: "Rb", name: "Rubidium" },
    ElementInfo { atomic_number: 38, symbol: "Sr", name: "Strontium" },
    ElementInfo { atomic_number: 39, symbol: "Y", name: "Yttrium" },
    ElementInfo { atomic_number: 40, symbol: "Zr", name: "Zirconium" },
    ElementInfo { atomic_number: 41, symbol: "Nb", name: "Niobium" },
    ElementInfo { atomic_number: 42, symbol: "Mo", name: "Molybdenum" },
    ElementInfo { atomic_number: 43, symbol: "Tc", name: "Technetium" },
    ElementInfo { atomic_number: 44, symbol: "Ru", name: "Ruthenium" },
    ElementInfo { atomic_number: 45, symbol: "Rh", name: "Rhodium" },
    ElementInfo { atomic_number: 46, symbol: "Pd", name: "Palladium" },
    ElementInfo { atomic_number: 47, symbol: "Ag", name: "Silver" },
    ElementInfo { atomic_number: 48, symbol: "Cd", name: "Cadmium" },
    ElementInfo { atomic_number: 49, symbol: "In", name: "Indium" },
    ElementInfo { atomic_number: 50, symbol: "Sn", name: "Tin" },
    ElementInfo { atomic_number: 51, symbol: "Sb", name: "Antimony" },
    ElementInfo { atomic_number: 52, symbol: "Te", name: "Tellurium" },
    ElementInfo { atomic_number: 53, symbol: "I", name: "Iodine" },
    ElementInfo { atomic_number: 54, symbol: "Xe", name: "Xenon" },
    ElementInfo { atomic_number: 55, symbol: "Cs", name: "Cesium" },
    ElementInfo { atomic_number: 56, symbol: "Ba", name: "Barium" },
    ElementInfo { atomic_number: 57, symbol: "La", name: "Lanthanum" },
    ElementInfo { atomic_number: 58, symbol: "Ce", name: "Cerium" },
    ElementInfo { atomic_number: 59, symbol: "Pr", name: "Praseodymium" },
    ElementInfo { atomic_number: 60, symbol: "Nd", name: "Neodymium" },
    ElementInfo { atomic_number: 61, symbol: "Pm", name: "Promethium" },
    ElementInfo { atomic_number: 62, symbol: "Sm", name: "Samarium" },
    ElementInfo { atomic_number: 63, symbol: "Eu", name: "Europium" },
    ElementInfo { atomic_number: 64, symbol: "Gd", name: "Gadolinium" },
    ElementInfo { atomic_number: 65, symbol: "Tb", name: "Terbium" },
    ElementInfo { atomic_number: 66, symbol: "Dy", name: "Dysprosium" },
    ElementInfo { atomic_number: 67, symbol: "Ho", name: "Holmium" },
    ElementInfo { atomic_number: 68, symbol: "Er", name: "Erbium" },
    ElementInfo { atomic_number: 69, symbol: "Tm", name: "Thulium" },
    ElementInfo { atomic_number: 70, symbol: "Yb", name: "Ytterbium" },
    ElementInfo { atomic_number: 71, symbol: "Lu", name: "Lutetium" },
    ElementInfo { atomic_number: 72, symbol: "Hf", name: "Hafnium" },
    ElementInfo { atomic_number: 73, symbol: "Ta", name: "Tantalum" },
    ElementInfo { atomic_number: 74, symbol: "W", name: "Tungsten" },
    ElementInfo { atomic_number: 75, symbol: "Re", name: "Rhenium" },
    ElementInfo { atomic_number: 76, symbol: "Os", name: "Osmium" },
    ElementInfo { atomic_number: 77, symbol: "Ir", name: "Iridium" },
    ElementInfo { atomic_number: 78, symbol: "Pt", name: "Platinum" },
    ElementInfo { atomic_number: 79, symbol: "Au", name: "Gold" },
    ElementInfo { atomic_number: 80, symbol: "Hg", name: "Mercury" },
    ElementInfo { atomic_number: 81, symbol: "Tl", name: "Thallium" },
    ElementInfo { atomic_number: 82, symbol: "Pb", name: "Lead" },
    ElementInfo { atomic_number: 83, symbol: "Bi", name: "Bismuth" },
    ElementInfo { atomic_number: 84, symbol: "Po", name: "Polonium" },
    ElementInfo { atomic_number: 85, symbol: "At", name: "Astatine" },
    ElementInfo { atomic_number: 86, symbol: "Rn", name: "Radon" },
    ElementInfo { atomic_number: 87, symbol: "Fr", name: "Francium" },
    ElementInfo { atomic_number: 88, symbol: "Ra", name: "Radium" },
    ElementInfo { atomic_number: 89, symbol: "Ac", name: "Actinium" },
    ElementInfo { atomic_number: 90, symbol: "Th", name: "Thorium" },
    ElementInfo { atomic_number: 91, symbol: "Pa", name: "Protactinium" },
    ElementInfo { atomic_number: 92, symbol: "U", name: "Uranium" },
    ElementInfo { atomic_number: 93, symbol: "Np", name: "Neptunium" },
    ElementInfo { atomic_number: 94, symbol: "Pu", name: "Plutonium" },
    ElementInfo { atomic_number: 95, symbol: "Am", name: "Americium" },
    ElementInfo { atomic_number: 96, symbol: "Cm", name: "Curium" },
    ElementInfo { atomic_number: 97, symbol: "Bk", name: "Berkelium" },
    ElementInfo { atomic_number: 98, symbol: "Cf", name: "Californium" },
    ElementInfo { atomic_number: 99, symbol: "Es", name: "Einsteinium" },
    ElementInfo { atomic_number: 100, symbol: "Fm", name: "Fermium" },
    ElementInfo { atomic_number: 101, symbol: "Md", name: "Mendelevium" },
    ElementInfo { atomic_number: 102, symbol: "No", name: "Nobelium" },
    ElementInfo { atomic_number: 103, symbol: "Lr", name: "Lawrencium" },
    ElementInfo { atomic_number: 104, symbol: "Rf", name: "Rutherfordium" },
    ElementInfo { atomic_number: 105, symbol: "Db", name: "Dubnium" },
    ElementInfo { atomic_number: 106, symbol: "Sg", name: "Seaborgium" },
    ElementInfo { atomic_number: 107, symbol: "Bh", name: "Bohrium" },
    ElementInfo { atomic_number: 108, symbol: "Hs", name: "Hassium" },
    ElementInfo { atomic_number: 109, symbol: "Mt", name: "Meitnerium" },
    ElementInfo { atomic_number: 110, symbol: "Ds", name: "Darmstadtium" },
    ElementInfo { atomic_number: 111, symbol: "Rg", name: "Roentgenium" },
    ElementInfo { atomic_number: 112, symbol: "Cn", name: "Copernicium" },
    ElementInfo { atomic_number: 113, symbol: "Nh", name: "Nihonium" },
    ElementInfo { atomic_number: 114, symbol: "Fl", name: "Flerovium" },
    ElementInfo { atomic_number: 115, symbol: "Mc", name: "Moscovium" },
    ElementInfo { atomic_number: 116, symbol: "Lv", name: "Livermorium" },
    ElementInfo { atomic_number: 117, symbol: "Ts", name: "Tennessine" },
    ElementInfo { atomic_number: 118, symbol: "Og", name: "Oganesson" },
];

/// Look up an element by its atomic number (1-based).
pub fn element_by_number(z: u32) -> Option<&'static ElementInfo> {
    let index = usize::try_from(z).ok()?.checked_sub(1)?;
    ELEMENTS.get(index)
}

/// Look up an element by its symbol (e.g. "C", "Fe"), ignoring ASCII case.
pub fn element_by_symbol(symbol: &str) -> Option<&'static ElementInfo> {
    ELEMENTS.iter().find(|e| e.symbol.eq_ignore_ascii_case(symbol))
}
