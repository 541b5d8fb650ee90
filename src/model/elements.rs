// src/model/elements.rs

/// Display category of an element, used only for disc coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementCategory {
    AlkaliMetal,
    AlkalineEarth,
    TransitionMetal,
    PostTransitionMetal,
    Metalloid,
    Nonmetal,
    Halogen,
    NobleGas,
    Lanthanide,
    Actinide,
}

impl ElementCategory {
    /// Base color for atom discs, roughly the usual periodic-table
    /// category palette.
    pub fn color(&self) -> (f64, f64, f64) {
        match self {
            ElementCategory::AlkaliMetal => (0.98, 0.45, 0.35),
            ElementCategory::AlkalineEarth => (0.99, 0.75, 0.29),
            ElementCategory::TransitionMetal => (0.55, 0.65, 0.90),
            ElementCategory::PostTransitionMetal => (0.45, 0.80, 0.75),
            ElementCategory::Metalloid => (0.55, 0.85, 0.45),
            ElementCategory::Nonmetal => (0.35, 0.85, 0.55),
            ElementCategory::Halogen => (0.40, 0.85, 0.90),
            ElementCategory::NobleGas => (0.75, 0.55, 0.95),
            ElementCategory::Lanthanide => (0.95, 0.55, 0.75),
            ElementCategory::Actinide => (0.90, 0.45, 0.55),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementRecord {
    pub number: u32,
    pub mass: f64,
    pub category: ElementCategory,
    /// Simplified valence-electron count: exact for main-group elements,
    /// fixed at 2 for the d- and f-blocks.
    pub valence: u32,
}

/// All 118 symbols in atomic-number order.
pub const SYMBOLS: [&str; 118] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S", "Cl",
    "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As",
    "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In",
    "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb",
    "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl",
    "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk",
    "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn",
    "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
];

/// Static element data: atomic number, standard atomic mass, display
/// category and simplified valence-electron count.
pub fn lookup(symbol: &str) -> Option<ElementRecord> {
    use ElementCategory::*;
    let (number, mass, category, valence) = match symbol {
        // --- Period 1 ---
        "H" => (1, 1.008, Nonmetal, 1),
        "He" => (2, 4.003, NobleGas, 2),
        // --- Period 2 ---
        "Li" => (3, 6.94, AlkaliMetal, 1),
        "Be" => (4, 9.012, AlkalineEarth, 2),
        "B" => (5, 10.81, Metalloid, 3),
        "C" => (6, 12.011, Nonmetal, 4),
        "N" => (7, 14.007, Nonmetal, 5),
        "O" => (8, 15.999, Nonmetal, 6),
        "F" => (9, 18.998, Halogen, 7),
        "Ne" => (10, 20.180, NobleGas, 8),
        // --- Period 3 ---
        "Na" => (11, 22.990, AlkaliMetal, 1),
        "Mg" => (12, 24.305, AlkalineEarth, 2),
        "Al" => (13, 26.982, PostTransitionMetal, 3),
        "Si" => (14, 28.085, Metalloid, 4),
        "P" => (15, 30.974, Nonmetal, 5),
        "S" => (16, 32.06, Nonmetal, 6),
        "Cl" => (17, 35.45, Halogen, 7),
        "Ar" => (18, 39.948, NobleGas, 8),
        // --- Period 4 ---
        "K" => (19, 39.098, AlkaliMetal, 1),
        "Ca" => (20, 40.078, AlkalineEarth, 2),
        "Sc" => (21, 44.956, TransitionMetal, 2),
        "Ti" => (22, 47.867, TransitionMetal, 2),
        "V" => (23, 50.942, TransitionMetal, 2),
        "Cr" => (24, 51.996, TransitionMetal, 2),
        "Mn" => (25, 54.938, TransitionMetal, 2),
        "Fe" => (26, 55.845, TransitionMetal, 2),
        "Co" => (27, 58.933, TransitionMetal, 2),
        "Ni" => (28, 58.693, TransitionMetal, 2),
        "Cu" => (29, 63.546, TransitionMetal, 2),
        "Zn" => (30, 65.38, TransitionMetal, 2),
        "Ga" => (31, 69.723, PostTransitionMetal, 3),
        "Ge" => (32, 72.630, Metalloid, 4),
        "As" => (33, 74.922, Metalloid, 5),
        "Se" => (34, 78.971, Nonmetal, 6),
        "Br" => (35, 79.904, Halogen, 7),
        "Kr" => (36, 83.798, NobleGas, 8),
        // --- Period 5 ---
        "Rb" => (37, 85.468, AlkaliMetal, 1),
        "Sr" => (38, 87.62, AlkalineEarth, 2),
        "Y" => (39, 88.906, TransitionMetal, 2),
        "Zr" => (40, 91.224, TransitionMetal, 2),
        "Nb" => (41, 92.906, TransitionMetal, 2),
        "Mo" => (42, 95.95, TransitionMetal, 2),
        "Tc" => (43, 98.0, TransitionMetal, 2),
        "Ru" => (44, 101.07, TransitionMetal, 2),
        "Rh" => (45, 102.906, TransitionMetal, 2),
        "Pd" => (46, 106.42, TransitionMetal, 2),
        "Ag" => (47, 107.868, TransitionMetal, 2),
        "Cd" => (48, 112.414, TransitionMetal, 2),
        "In" => (49, 114.818, PostTransitionMetal, 3),
        "Sn" => (50, 118.710, PostTransitionMetal, 4),
        "Sb" => (51, 121.760, Metalloid, 5),
        "Te" => (52, 127.60, Metalloid, 6),
        "I" => (53, 126.904, Halogen, 7),
        "Xe" => (54, 131.293, NobleGas, 8),
        // --- Period 6 ---
        "Cs" => (55, 132.905, AlkaliMetal, 1),
        "Ba" => (56, 137.327, AlkalineEarth, 2),
        "La" => (57, 138.905, Lanthanide, 2),
        "Ce" => (58, 140.116, Lanthanide, 2),
        "Pr" => (59, 140.908, Lanthanide, 2),
        "Nd" => (60, 144.242, Lanthanide, 2),
        "Pm" => (61, 145.0, Lanthanide, 2),
        "Sm" => (62, 150.36, Lanthanide, 2),
        "Eu" => (63, 151.964, Lanthanide, 2),
        "Gd" => (64, 157.25, Lanthanide, 2),
        "Tb" => (65, 158.925, Lanthanide, 2),
        "Dy" => (66, 162.500, Lanthanide, 2),
        "Ho" => (67, 164.930, Lanthanide, 2),
        "Er" => (68, 167.259, Lanthanide, 2),
        "Tm" => (69, 168.934, Lanthanide, 2),
        "Yb" => (70, 173.045, Lanthanide, 2),
        "Lu" => (71, 174.967, Lanthanide, 2),
        "Hf" => (72, 178.49, TransitionMetal, 2),
        "Ta" => (73, 180.948, TransitionMetal, 2),
        "W" => (74, 183.84, TransitionMetal, 2),
        "Re" => (75, 186.207, TransitionMetal, 2),
        "Os" => (76, 190.23, TransitionMetal, 2),
        "Ir" => (77, 192.217, TransitionMetal, 2),
        "Pt" => (78, 195.084, TransitionMetal, 2),
        "Au" => (79, 196.967, TransitionMetal, 2),
        "Hg" => (80, 200.592, TransitionMetal, 2),
        "Tl" => (81, 204.38, PostTransitionMetal, 3),
        "Pb" => (82, 207.2, PostTransitionMetal, 4),
        "Bi" => (83, 208.980, PostTransitionMetal, 5),
        "Po" => (84, 209.0, PostTransitionMetal, 6),
        "At" => (85, 210.0, Halogen, 7),
        "Rn" => (86, 222.0, NobleGas, 8),
        // --- Period 7 ---
        "Fr" => (87, 223.0, AlkaliMetal, 1),
        "Ra" => (88, 226.0, AlkalineEarth, 2),
        "Ac" => (89, 227.0, Actinide, 2),
        "Th" => (90, 232.038, Actinide, 2),
        "Pa" => (91, 231.036, Actinide, 2),
        "U" => (92, 238.029, Actinide, 2),
        "Np" => (93, 237.0, Actinide, 2),
        "Pu" => (94, 244.0, Actinide, 2),
        "Am" => (95, 243.0, Actinide, 2),
        "Cm" => (96, 247.0, Actinide, 2),
        "Bk" => (97, 247.0, Actinide, 2),
        "Cf" => (98, 251.0, Actinide, 2),
        "Es" => (99, 252.0, Actinide, 2),
        "Fm" => (100, 257.0, Actinide, 2),
        "Md" => (101, 258.0, Actinide, 2),
        "No" => (102, 259.0, Actinide, 2),
        "Lr" => (103, 266.0, Actinide, 2),
        "Rf" => (104, 267.0, TransitionMetal, 2),
        "Db" => (105, 268.0, TransitionMetal, 2),
        "Sg" => (106, 269.0, TransitionMetal, 2),
        "Bh" => (107, 270.0, TransitionMetal, 2),
        "Hs" => (108, 277.0, TransitionMetal, 2),
        "Mt" => (109, 278.0, TransitionMetal, 2),
        "Ds" => (110, 281.0, TransitionMetal, 2),
        "Rg" => (111, 282.0, TransitionMetal, 2),
        "Cn" => (112, 285.0, TransitionMetal, 2),
        "Nh" => (113, 286.0, PostTransitionMetal, 3),
        "Fl" => (114, 289.0, PostTransitionMetal, 4),
        "Mc" => (115, 290.0, PostTransitionMetal, 5),
        "Lv" => (116, 293.0, PostTransitionMetal, 6),
        "Ts" => (117, 294.0, Halogen, 7),
        "Og" => (118, 294.0, NobleGas, 8),
        _ => return None,
    };
    Some(ElementRecord {
        number,
        mass,
        category,
        valence,
    })
}

/// Disc color for a symbol; unknown symbols fall back to white.
pub fn display_color(symbol: &str) -> (f64, f64, f64) {
    lookup(symbol)
        .map(|r| r.category.color())
        .unwrap_or((1.0, 1.0, 1.0))
}
