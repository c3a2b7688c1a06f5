use super::RadiusType;

/// Static per-element record.
///
/// Van der Waals radii follow PyMOL's element table, covalent radii are the
/// single-bond values of Cordero et al. (2008), colors are the Jmol palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementData {
    /// Atomic number.
    pub number: u8,
    /// Chemical symbol.
    pub symbol: &'static str,
    /// English name, capitalized.
    pub name: &'static str,
    /// Van der Waals radius in angstroms.
    pub vdw_radius: f32,
    /// Covalent radius in angstroms.
    pub covalent_radius: f32,
    rgb: u32,
}

impl ElementData {
    const fn new(
        number: u8,
        symbol: &'static str,
        name: &'static str,
        vdw_radius: f32,
        covalent_radius: f32,
        rgb: u32,
    ) -> Self {
        Self {
            number,
            symbol,
            name,
            vdw_radius,
            covalent_radius,
            rgb,
        }
    }

    /// Radius of the requested kind.
    #[must_use]
    pub fn radius(&self, radius_type: RadiusType) -> f32 {
        match radius_type {
            RadiusType::VanDerWaals => self.vdw_radius,
            RadiusType::Covalent => self.covalent_radius,
        }
    }

    /// Display color as normalized RGB.
    #[must_use]
    pub fn color(&self) -> [f32; 3] {
        let [_, r, g, b] = self.rgb.to_be_bytes();
        [
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        ]
    }
}

pub(super) static ELEMENTS: [ElementData; 118] = [
    ElementData::new(1, "H", "Hydrogen", 1.20, 0.31, 0xFFFFFF),
    ElementData::new(2, "He", "Helium", 1.40, 0.28, 0xD9FFFF),
    ElementData::new(3, "Li", "Lithium", 1.82, 1.28, 0xCC80FF),
    ElementData::new(4, "Be", "Beryllium", 1.80, 0.96, 0xC2FF00),
    ElementData::new(5, "B", "Boron", 1.85, 0.84, 0xFFB5B5),
    ElementData::new(6, "C", "Carbon", 1.70, 0.76, 0x909090),
    ElementData::new(7, "N", "Nitrogen", 1.55, 0.71, 0x3050F8),
    ElementData::new(8, "O", "Oxygen", 1.52, 0.66, 0xFF0D0D),
    ElementData::new(9, "F", "Fluorine", 1.47, 0.57, 0x90E050),
    ElementData::new(10, "Ne", "Neon", 1.54, 0.58, 0xB3E3F5),
    ElementData::new(11, "Na", "Sodium", 2.27, 1.66, 0xAB5CF2),
    ElementData::new(12, "Mg", "Magnesium", 1.73, 1.41, 0x8AFF00),
    ElementData::new(13, "Al", "Aluminum", 2.00, 1.21, 0xBFA6A6),
    ElementData::new(14, "Si", "Silicon", 2.10, 1.11, 0xF0C8A0),
    ElementData::new(15, "P", "Phosphorus", 1.80, 1.07, 0xFF8000),
    ElementData::new(16, "S", "Sulfur", 1.80, 1.05, 0xFFFF30),
    ElementData::new(17, "Cl", "Chlorine", 1.75, 1.02, 0x1FF01F),
    ElementData::new(18, "Ar", "Argon", 1.88, 1.06, 0x80D1E3),
    ElementData::new(19, "K", "Potassium", 2.75, 2.03, 0x8F40D4),
    ElementData::new(20, "Ca", "Calcium", 1.80, 1.76, 0x3DFF00),
    ElementData::new(21, "Sc", "Scandium", 1.80, 1.70, 0xE6E6E6),
    ElementData::new(22, "Ti", "Titanium", 1.80, 1.60, 0xBFC2C7),
    ElementData::new(23, "V", "Vanadium", 1.80, 1.53, 0xA6A6AB),
    ElementData::new(24, "Cr", "Chromium", 1.80, 1.39, 0x8A99C7),
    ElementData::new(25, "Mn", "Manganese", 1.73, 1.39, 0x9C7AC7),
    ElementData::new(26, "Fe", "Iron", 1.80, 1.32, 0xE06633),
    ElementData::new(27, "Co", "Cobalt", 1.80, 1.26, 0xF090A0),
    ElementData::new(28, "Ni", "Nickel", 1.63, 1.24, 0x50D050),
    ElementData::new(29, "Cu", "Copper", 1.40, 1.32, 0xC88033),
    ElementData::new(30, "Zn", "Zinc", 1.39, 1.22, 0x7D80B0),
    ElementData::new(31, "Ga", "Gallium", 1.87, 1.22, 0xC28F8F),
    ElementData::new(32, "Ge", "Germanium", 1.80, 1.20, 0x668F8F),
    ElementData::new(33, "As", "Arsenic", 1.85, 1.19, 0xBD80E3),
    ElementData::new(34, "Se", "Selenium", 1.90, 1.20, 0xFFA100),
    ElementData::new(35, "Br", "Bromine", 1.85, 1.20, 0xA62929),
    ElementData::new(36, "Kr", "Krypton", 2.02, 1.16, 0x5CB8D1),
    ElementData::new(37, "Rb", "Rubidium", 1.80, 2.20, 0x702EB0),
    ElementData::new(38, "Sr", "Strontium", 1.80, 1.95, 0x00FF00),
    ElementData::new(39, "Y", "Yttrium", 1.80, 1.90, 0x94FFFF),
    ElementData::new(40, "Zr", "Zirconium", 1.80, 1.75, 0x94E0E0),
    ElementData::new(41, "Nb", "Niobium", 1.80, 1.64, 0x73C2C9),
    ElementData::new(42, "Mo", "Molybdenum", 1.80, 1.54, 0x54B5B5),
    ElementData::new(43, "Tc", "Technetium", 1.80, 1.47, 0x3B9E9E),
    ElementData::new(44, "Ru", "Ruthenium", 1.80, 1.46, 0x248F8F),
    ElementData::new(45, "Rh", "Rhodium", 1.80, 1.42, 0x0A7D8C),
    ElementData::new(46, "Pd", "Palladium", 1.63, 1.39, 0x006985),
    ElementData::new(47, "Ag", "Silver", 1.72, 1.45, 0xC0C0C0),
    ElementData::new(48, "Cd", "Cadmium", 1.58, 1.44, 0xFFD98F),
    ElementData::new(49, "In", "Indium", 1.93, 1.42, 0xA67573),
    ElementData::new(50, "Sn", "Tin", 2.17, 1.39, 0x668080),
    ElementData::new(51, "Sb", "Antimony", 1.80, 1.39, 0x9E63B5),
    ElementData::new(52, "Te", "Tellurium", 2.06, 1.38, 0xD47A00),
    ElementData::new(53, "I", "Iodine", 1.98, 1.39, 0x940094),
    ElementData::new(54, "Xe", "Xenon", 2.16, 1.40, 0x429EB0),
    ElementData::new(55, "Cs", "Cesium", 1.80, 2.44, 0x57178F),
    ElementData::new(56, "Ba", "Barium", 1.80, 2.15, 0x00C900),
    ElementData::new(57, "La", "Lanthanum", 1.80, 2.07, 0x70D4FF),
    ElementData::new(58, "Ce", "Cerium", 1.80, 2.04, 0xFFFFC7),
    ElementData::new(59, "Pr", "Praseodymium", 1.80, 2.03, 0xD9FFC7),
    ElementData::new(60, "Nd", "Neodymium", 1.80, 2.01, 0xC7FFC7),
    ElementData::new(61, "Pm", "Promethium", 1.80, 1.99, 0xA3FFC7),
    ElementData::new(62, "Sm", "Samarium", 1.80, 1.98, 0x8FFFC7),
    ElementData::new(63, "Eu", "Europium", 1.80, 1.98, 0x61FFC7),
    ElementData::new(64, "Gd", "Gadolinium", 1.80, 1.96, 0x45FFC7),
    ElementData::new(65, "Tb", "Terbium", 1.80, 1.94, 0x30FFC7),
    ElementData::new(66, "Dy", "Dysprosium", 1.80, 1.92, 0x1FFFC7),
    ElementData::new(67, "Ho", "Holmium", 1.80, 1.92, 0x00FF9C),
    ElementData::new(68, "Er", "Erbium", 1.80, 1.89, 0x00E675),
    ElementData::new(69, "Tm", "Thulium", 1.80, 1.90, 0x00D452),
    ElementData::new(70, "Yb", "Ytterbium", 1.80, 1.87, 0x00BF38),
    ElementData::new(71, "Lu", "Lutetium", 1.80, 1.87, 0x00AB24),
    ElementData::new(72, "Hf", "Hafnium", 1.80, 1.75, 0x4DC2FF),
    ElementData::new(73, "Ta", "Tantalum", 1.80, 1.70, 0x4DA6FF),
    ElementData::new(74, "W", "Tungsten", 1.80, 1.62, 0x2194D6),
    ElementData::new(75, "Re", "Rhenium", 1.80, 1.51, 0x267DAB),
    ElementData::new(76, "Os", "Osmium", 1.80, 1.44, 0x266696),
    ElementData::new(77, "Ir", "Iridium", 1.80, 1.41, 0x175487),
    ElementData::new(78, "Pt", "Platinum", 1.75, 1.36, 0xD0D0E0),
    ElementData::new(79, "Au", "Gold", 1.66, 1.36, 0xFFD123),
    ElementData::new(80, "Hg", "Mercury", 1.55, 1.32, 0xB8B8D0),
    ElementData::new(81, "Tl", "Thallium", 1.96, 1.45, 0xA6544D),
    ElementData::new(82, "Pb", "Lead", 2.02, 1.46, 0x575961),
    ElementData::new(83, "Bi", "Bismuth", 1.80, 1.48, 0x9E4FB5),
    ElementData::new(84, "Po", "Polonium", 1.80, 1.40, 0xAB5C00),
    ElementData::new(85, "At", "Astatine", 1.80, 1.50, 0x754F45),
    ElementData::new(86, "Rn", "Radon", 1.80, 1.50, 0x428296),
    ElementData::new(87, "Fr", "Francium", 1.80, 2.60, 0x420066),
    ElementData::new(88, "Ra", "Radium", 1.80, 2.21, 0x007D00),
    ElementData::new(89, "Ac", "Actinium", 1.80, 2.15, 0x70ABFA),
    ElementData::new(90, "Th", "Thorium", 1.80, 2.06, 0x00BAFF),
    ElementData::new(91, "Pa", "Protactinium", 1.80, 2.00, 0x00A1FF),
    ElementData::new(92, "U", "Uranium", 1.86, 1.96, 0x008FFF),
    ElementData::new(93, "Np", "Neptunium", 1.80, 1.90, 0x0080FF),
    ElementData::new(94, "Pu", "Plutonium", 1.80, 1.87, 0x006BFF),
    ElementData::new(95, "Am", "Americium", 1.80, 1.80, 0x545CF2),
    ElementData::new(96, "Cm", "Curium", 1.80, 1.69, 0x785CE3),
    ElementData::new(97, "Bk", "Berkelium", 1.80, 1.68, 0x8A4FE3),
    ElementData::new(98, "Cf", "Californium", 1.80, 1.68, 0xA136D4),
    ElementData::new(99, "Es", "Einsteinium", 1.80, 1.65, 0xB31FD4),
    ElementData::new(100, "Fm", "Fermium", 1.80, 1.67, 0xB31FBA),
    ElementData::new(101, "Md", "Mendelevium", 1.80, 1.73, 0xB30DA6),
    ElementData::new(102, "No", "Nobelium", 1.80, 1.76, 0xBD0D87),
    ElementData::new(103, "Lr", "Lawrencium", 1.80, 1.61, 0xC70066),
    ElementData::new(104, "Rf", "Rutherfordium", 1.80, 1.57, 0xCC0059),
    ElementData::new(105, "Db", "Dubnium", 1.80, 1.49, 0xD1004F),
    ElementData::new(106, "Sg", "Seaborgium", 1.80, 1.43, 0xD90045),
    ElementData::new(107, "Bh", "Bohrium", 1.80, 1.41, 0xE00038),
    ElementData::new(108, "Hs", "Hassium", 1.80, 1.34, 0xE6002E),
    ElementData::new(109, "Mt", "Meitnerium", 1.80, 1.29, 0xEB0026),
    ElementData::new(110, "Ds", "Darmstadtium", 1.80, 1.28, 0xFF1493),
    ElementData::new(111, "Rg", "Roentgenium", 1.80, 1.21, 0xFF1493),
    ElementData::new(112, "Cn", "Copernicium", 1.80, 1.22, 0xFF1493),
    ElementData::new(113, "Nh", "Nihonium", 1.80, 1.36, 0xFF1493),
    ElementData::new(114, "Fl", "Flerovium", 1.80, 1.43, 0xFF1493),
    ElementData::new(115, "Mc", "Moscovium", 1.80, 1.62, 0xFF1493),
    ElementData::new(116, "Lv", "Livermorium", 1.80, 1.75, 0xFF1493),
    ElementData::new(117, "Ts", "Tennessine", 1.80, 1.65, 0xFF1493),
    ElementData::new(118, "Og", "Oganesson", 1.80, 1.57, 0xFF1493),
];
