//! Static content taxonomy: subjects, class levels, chapters, and topic
//! keywords for every shelf on the platform.

use serde::{Deserialize, Serialize};

/// Subjects covered by the platform.
///
/// The variant order here is the scan order used by the classifier, so it is
/// part of the observable matching behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    /// Chemistry shelves.
    Chemistry,
    /// Physics shelves.
    Physics,
    /// Mathematics shelves.
    Mathematics,
    /// Biology shelves.
    Biology,
}

impl Subject {
    /// All subjects in table-declaration order.
    pub const ALL: [Subject; 4] = [
        Subject::Chemistry,
        Subject::Physics,
        Subject::Mathematics,
        Subject::Biology,
    ];

    /// Lower-case display name; also the keyword matched inside questions.
    pub fn name(self) -> &'static str {
        match self {
            Subject::Chemistry => "chemistry",
            Subject::Physics => "physics",
            Subject::Mathematics => "mathematics",
            Subject::Biology => "biology",
        }
    }
}

/// Class level a shelf belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Class XI.
    Lower,
    /// Class XII.
    Upper,
}

impl Level {
    /// Roman numeral used in page content and shelf naming.
    pub fn numeral(self) -> &'static str {
        match self {
            Level::Lower => "XI",
            Level::Upper => "XII",
        }
    }
}

/// One chapter of a shelf together with its topic keywords.
///
/// Topic keywords are matched as lower-case substrings of the question text,
/// in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chapter {
    /// Chapter number as printed in the book.
    pub number: u32,
    /// Chapter title.
    pub name: &'static str,
    /// Topic keywords in scan order.
    pub topics: &'static [&'static str],
}

/// All chapters of one subject at one level, plus the route prefix its pages
/// are served under.
#[derive(Debug, Clone, Copy)]
pub struct Shelf {
    /// Owning subject.
    pub subject: Subject,
    /// Class level.
    pub level: Level,
    /// First path segment of every page route on this shelf.
    pub route_prefix: &'static str,
    /// Chapters in book order.
    pub chapters: &'static [Chapter],
}

impl Shelf {
    /// Looks up a chapter by its printed number.
    pub fn chapter(&self, number: u32) -> Option<&'static Chapter> {
        self.chapters.iter().find(|chapter| chapter.number == number)
    }
}

/// Read-only handle over the shelf table.
///
/// The table is immutable for the process lifetime; handles are cheap copies.
#[derive(Debug, Clone, Copy)]
pub struct Taxonomy {
    shelves: &'static [Shelf],
}

impl Taxonomy {
    /// Returns the built-in shelf table.
    pub fn builtin() -> Self {
        Self { shelves: SHELVES }
    }

    /// All shelves in declaration order.
    pub fn shelves(&self) -> &'static [Shelf] {
        self.shelves
    }

    /// Looks up the shelf for a subject/level pair.
    pub fn shelf(&self, subject: Subject, level: Level) -> Option<&'static Shelf> {
        self.shelves
            .iter()
            .find(|shelf| shelf.subject == subject && shelf.level == level)
    }

    /// Resolves a page route (e.g. `/chemistrybooks/ch3.html`) to its shelf by
    /// matching the route prefix against the path segments.
    pub fn shelf_for_route(&self, route: &str) -> Option<&'static Shelf> {
        let mut segments = route.split('/').filter(|segment| !segment.is_empty());
        segments.find_map(|segment| {
            self.shelves
                .iter()
                .find(|shelf| shelf.route_prefix == segment)
        })
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}

static SHELVES: &[Shelf] = &[
    Shelf {
        subject: Subject::Chemistry,
        level: Level::Lower,
        route_prefix: "chemistrybooks",
        chapters: CHEMISTRY_XI,
    },
    Shelf {
        subject: Subject::Chemistry,
        level: Level::Upper,
        route_prefix: "chemistryxiibooks",
        chapters: CHEMISTRY_XII,
    },
    Shelf {
        subject: Subject::Physics,
        level: Level::Lower,
        route_prefix: "physicsbooks",
        chapters: PHYSICS_XI,
    },
    Shelf {
        subject: Subject::Physics,
        level: Level::Upper,
        route_prefix: "physicsxiibooks",
        chapters: PHYSICS_XII,
    },
    Shelf {
        subject: Subject::Mathematics,
        level: Level::Lower,
        route_prefix: "mathbooks",
        chapters: MATHEMATICS_XI,
    },
    Shelf {
        subject: Subject::Mathematics,
        level: Level::Upper,
        route_prefix: "mathsxiibooks",
        chapters: MATHEMATICS_XII,
    },
    Shelf {
        subject: Subject::Biology,
        level: Level::Lower,
        route_prefix: "biologybooks",
        chapters: BIOLOGY_XI,
    },
    Shelf {
        subject: Subject::Biology,
        level: Level::Upper,
        route_prefix: "biologyxiibooks",
        chapters: BIOLOGY_XII,
    },
];

const CHEMISTRY_XI: &[Chapter] = &[
    Chapter {
        number: 1,
        name: "Stoichiometry",
        topics: &["mole concept", "calculations", "limiting reactant", "reaction yield"],
    },
    Chapter {
        number: 2,
        name: "Atomic Structure",
        topics: &["atomic models", "electron configuration", "quantum numbers", "periodic trends"],
    },
    Chapter {
        number: 3,
        name: "Chemical Bonding",
        topics: &["ionic bonding", "covalent bonding", "metallic bonding", "lewis structures"],
    },
    Chapter {
        number: 4,
        name: "States of Matter",
        topics: &["gas laws", "liquid properties", "solid structures", "phase changes"],
    },
    Chapter {
        number: 5,
        name: "Thermodynamics",
        topics: &["enthalpy", "entropy", "gibbs free energy", "heat capacity"],
    },
    Chapter {
        number: 6,
        name: "Chemical Equilibrium",
        topics: &["equilibrium constant", "le chatelier principle", "reaction quotient"],
    },
    Chapter {
        number: 7,
        name: "Acids, Bases, and Salts",
        topics: &["pH scale", "buffer solutions", "acid-base titrations", "salt hydrolysis"],
    },
    Chapter {
        number: 8,
        name: "Chemical Kinetics",
        topics: &["reaction rate", "rate laws", "activation energy", "catalysis"],
    },
    Chapter {
        number: 9,
        name: "Solutions and Colloids",
        topics: &["solubility", "colligative properties", "osmosis", "colloids"],
    },
    Chapter {
        number: 10,
        name: "Thermochemistry",
        topics: &["heat of reaction", "calorimetry", "bond energy", "hess law"],
    },
    Chapter {
        number: 11,
        name: "Electrochemistry",
        topics: &["galvanic cells", "electrolysis", "nernst equation", "corrosion"],
    },
];

const CHEMISTRY_XII: &[Chapter] = &[
    Chapter {
        number: 1,
        name: "Solid State",
        topics: &["crystal structures", "defects", "electrical properties", "magnetic properties"],
    },
    Chapter {
        number: 2,
        name: "Solutions",
        topics: &["raoult law", "ideal solutions", "azeotropes", "osmotic pressure"],
    },
    Chapter {
        number: 3,
        name: "Electrochemistry",
        topics: &["conductance", "kohlrausch law", "batteries", "fuel cells"],
    },
    Chapter {
        number: 4,
        name: "Chemical Kinetics",
        topics: &["integrated rate laws", "half-life", "temperature dependence", "mechanism"],
    },
    Chapter {
        number: 5,
        name: "Surface Chemistry",
        topics: &["adsorption", "catalysis", "colloids", "emulsions"],
    },
    Chapter {
        number: 6,
        name: "General Principles and Processes of Isolation of Elements",
        topics: &["metallurgy", "ore concentration", "extraction", "refining"],
    },
    Chapter {
        number: 7,
        name: "p-Block Elements",
        topics: &["group 13-18", "properties", "compounds", "applications"],
    },
    Chapter {
        number: 8,
        name: "d- and f-Block Elements",
        topics: &["transition metals", "lanthanides", "actinides", "coordination compounds"],
    },
    Chapter {
        number: 9,
        name: "Coordination Compounds",
        topics: &["werner theory", "nomenclature", "isomerism", "bonding"],
    },
    Chapter {
        number: 10,
        name: "Haloalkanes and Haloarenes",
        topics: &["nomenclature", "preparation", "reactions", "mechanisms"],
    },
    Chapter {
        number: 11,
        name: "Alcohols, Phenols, and Ethers",
        topics: &["classification", "preparation", "reactions", "properties"],
    },
    Chapter {
        number: 12,
        name: "Aldehydes, Ketones, and Carboxylic Acids",
        topics: &["nomenclature", "preparation", "reactions", "mechanisms"],
    },
    Chapter {
        number: 13,
        name: "Amines",
        topics: &["classification", "preparation", "reactions", "properties"],
    },
    Chapter {
        number: 14,
        name: "Biomolecules",
        topics: &["carbohydrates", "proteins", "nucleic acids", "vitamins"],
    },
];

const PHYSICS_XI: &[Chapter] = &[
    Chapter {
        number: 1,
        name: "Physics and Measurements",
        topics: &["units", "dimensions", "measurement", "errors"],
    },
    Chapter {
        number: 2,
        name: "Kinematics",
        topics: &["motion", "velocity", "acceleration", "projectile motion"],
    },
    Chapter {
        number: 3,
        name: "Dynamics",
        topics: &["newton laws", "friction", "momentum", "impulse"],
    },
    Chapter {
        number: 4,
        name: "Rotational and Circular Motion",
        topics: &["angular velocity", "centripetal force", "moment of inertia", "torque"],
    },
    Chapter {
        number: 5,
        name: "Work, Energy and Power",
        topics: &["work", "kinetic energy", "potential energy", "conservation"],
    },
    Chapter {
        number: 6,
        name: "Fluid Statics",
        topics: &["pressure", "pascal law", "archimedes principle", "surface tension"],
    },
    Chapter {
        number: 7,
        name: "Fluid Dynamics",
        topics: &["bernoulli equation", "viscosity", "turbulence", "reynolds number"],
    },
    Chapter {
        number: 8,
        name: "Electric Fields",
        topics: &["coulomb law", "electric field", "gauss law", "potential"],
    },
    Chapter {
        number: 9,
        name: "Capacitors",
        topics: &["capacitance", "parallel plate", "energy", "dielectrics"],
    },
    Chapter {
        number: 10,
        name: "D.C Circuits",
        topics: &["ohm law", "kirchhoff laws", "power", "resistance"],
    },
    Chapter {
        number: 11,
        name: "Oscillations",
        topics: &["simple harmonic motion", "pendulum", "damping", "resonance"],
    },
    Chapter {
        number: 12,
        name: "Acoustics",
        topics: &["sound waves", "frequency", "amplitude", "doppler effect"],
    },
    Chapter {
        number: 13,
        name: "Physical Optics",
        topics: &["interference", "diffraction", "polarization", "coherence"],
    },
    Chapter {
        number: 14,
        name: "Communication",
        topics: &["modulation", "demodulation", "antenna", "propagation"],
    },
];

const PHYSICS_XII: &[Chapter] = &[
    Chapter {
        number: 15,
        name: "Electric Charges and Fields",
        topics: &["coulomb law", "electric field", "gauss law", "electric dipole"],
    },
    Chapter {
        number: 16,
        name: "Electrostatic Potential and Capacitance",
        topics: &["electric potential", "equipotential surfaces", "capacitance", "energy"],
    },
    Chapter {
        number: 17,
        name: "Current Electricity",
        topics: &["drift velocity", "ohm law", "resistivity", "kirchhoff laws"],
    },
    Chapter {
        number: 18,
        name: "Moving Charges and Magnetism",
        topics: &["magnetic force", "biot-savart law", "ampere law", "solenoid"],
    },
    Chapter {
        number: 19,
        name: "Magnetism and Matter",
        topics: &["magnetic dipole", "magnetization", "magnetic materials", "hysteresis"],
    },
    Chapter {
        number: 20,
        name: "Electromagnetic Induction",
        topics: &["faraday law", "lenz law", "self inductance", "mutual inductance"],
    },
    Chapter {
        number: 21,
        name: "Alternating Current",
        topics: &["ac circuits", "impedance", "resonance", "power factor"],
    },
    Chapter {
        number: 22,
        name: "Electromagnetic Waves",
        topics: &["maxwell equations", "wave equation", "spectrum", "properties"],
    },
    Chapter {
        number: 23,
        name: "Ray Optics and Optical Instruments",
        topics: &["reflection", "refraction", "lenses", "mirrors"],
    },
    Chapter {
        number: 24,
        name: "Wave Optics",
        topics: &["interference", "diffraction", "polarization", "coherence"],
    },
    Chapter {
        number: 25,
        name: "Dual Nature of Radiation and Matter",
        topics: &["photoelectric effect", "compton effect", "de broglie waves", "uncertainty principle"],
    },
    Chapter {
        number: 26,
        name: "Atoms",
        topics: &["bohr model", "energy levels", "spectral lines", "quantum mechanics"],
    },
    Chapter {
        number: 27,
        name: "Nuclei",
        topics: &["nuclear structure", "radioactivity", "nuclear reactions", "binding energy"],
    },
    Chapter {
        number: 28,
        name: "Semiconductor Electronics",
        topics: &["p-n junction", "diodes", "transistors", "logic gates"],
    },
];

const MATHEMATICS_XI: &[Chapter] = &[
    Chapter {
        number: 1,
        name: "Complex Numbers",
        topics: &["imaginary numbers", "argand plane", "polar form", "de moivre theorem"],
    },
    Chapter {
        number: 2,
        name: "Matrices & Determinants",
        topics: &["matrix operations", "determinants", "inverse", "rank"],
    },
    Chapter {
        number: 3,
        name: "Vectors",
        topics: &["vector algebra", "dot product", "cross product", "applications"],
    },
    Chapter {
        number: 4,
        name: "Sequences & Series",
        topics: &["arithmetic progression", "geometric progression", "summation", "convergence"],
    },
    Chapter {
        number: 5,
        name: "Miscellaneous Series",
        topics: &["special series", "binomial series", "taylor series", "maclaurin series"],
    },
    Chapter {
        number: 6,
        name: "Permutation, Combination & Probability",
        topics: &["counting principles", "permutations", "combinations", "probability"],
    },
    Chapter {
        number: 7,
        name: "Mathematical Induction & Binomial Theorem",
        topics: &["induction", "binomial expansion", "coefficients", "applications"],
    },
    Chapter {
        number: 8,
        name: "Functions & Graphs",
        topics: &["domain", "range", "graphing", "transformations"],
    },
    Chapter {
        number: 9,
        name: "Linear Inequalities",
        topics: &["inequality solving", "graphical method", "systems", "applications"],
    },
    Chapter {
        number: 10,
        name: "Trigonometric Identities",
        topics: &["identities", "sum and difference", "double angle", "half angle"],
    },
    Chapter {
        number: 11,
        name: "Application of Trigonometry",
        topics: &["law of sines", "law of cosines", "area", "applications"],
    },
    Chapter {
        number: 12,
        name: "Trigonometric Functions",
        topics: &["graphs", "inverse functions", "equations", "periodicity"],
    },
];

const MATHEMATICS_XII: &[Chapter] = &[
    Chapter {
        number: 1,
        name: "Relations and Functions",
        topics: &["relations", "functions", "composition", "inverse"],
    },
    Chapter {
        number: 2,
        name: "Inverse Trigonometric Functions",
        topics: &["inverse functions", "domain", "range", "graphs"],
    },
    Chapter {
        number: 3,
        name: "Matrices",
        topics: &["matrix operations", "types", "properties", "applications"],
    },
    Chapter {
        number: 4,
        name: "Determinants",
        topics: &["properties", "expansion", "cramer rule", "applications"],
    },
    Chapter {
        number: 5,
        name: "Continuity and Differentiability",
        topics: &["limits", "continuity", "derivatives", "chain rule"],
    },
    Chapter {
        number: 6,
        name: "Application of Derivatives",
        topics: &["rate of change", "maxima minima", "tangents", "normals"],
    },
    Chapter {
        number: 7,
        name: "Integrals",
        topics: &["antiderivatives", "integration techniques", "substitution", "parts"],
    },
    Chapter {
        number: 8,
        name: "Application of Integrals",
        topics: &["area under curve", "volume", "length", "applications"],
    },
    Chapter {
        number: 9,
        name: "Differential Equations",
        topics: &["formation", "solution", "homogeneous", "linear"],
    },
    Chapter {
        number: 10,
        name: "Vector Algebra",
        topics: &["vector operations", "scalar triple product", "vector triple product", "applications"],
    },
    Chapter {
        number: 11,
        name: "Three Dimensional Geometry",
        topics: &["direction cosines", "plane", "line", "distance"],
    },
    Chapter {
        number: 12,
        name: "Linear Programming",
        topics: &["objective function", "constraints", "feasible region", "optimization"],
    },
    Chapter {
        number: 13,
        name: "Probability",
        topics: &["conditional probability", "bayes theorem", "random variables", "distributions"],
    },
];

const BIOLOGY_XI: &[Chapter] = &[
    Chapter {
        number: 1,
        name: "The Living World",
        topics: &["characteristics", "classification", "taxonomy", "nomenclature"],
    },
    Chapter {
        number: 2,
        name: "Biological Classification",
        topics: &["five kingdom", "monera", "protista", "fungi"],
    },
    Chapter {
        number: 3,
        name: "Plant Kingdom",
        topics: &["algae", "bryophytes", "pteridophytes", "gymnosperms"],
    },
    Chapter {
        number: 4,
        name: "Animal Kingdom",
        topics: &["porifera", "cnidaria", "platyhelminthes", "annelida"],
    },
    Chapter {
        number: 5,
        name: "Morphology of Flowering Plants",
        topics: &["root", "stem", "leaf", "flower"],
    },
    Chapter {
        number: 6,
        name: "Anatomy of Flowering Plants",
        topics: &["tissues", "meristem", "permanent tissues", "secondary growth"],
    },
    Chapter {
        number: 7,
        name: "Structural Organisation in Animals",
        topics: &["epithelial", "connective", "muscular", "nervous tissues"],
    },
    Chapter {
        number: 8,
        name: "Cell: The Unit of Life",
        topics: &["cell theory", "prokaryotic", "eukaryotic", "organelles"],
    },
    Chapter {
        number: 9,
        name: "Biomolecules",
        topics: &["carbohydrates", "proteins", "lipids", "nucleic acids"],
    },
    Chapter {
        number: 10,
        name: "Cell Cycle and Cell Division",
        topics: &["mitosis", "meiosis", "cell cycle", "regulation"],
    },
    Chapter {
        number: 11,
        name: "Transport in Plants",
        topics: &["transpiration", "translocation", "root pressure", "cohesion tension"],
    },
    Chapter {
        number: 12,
        name: "Mineral Nutrition",
        topics: &["essential elements", "deficiency symptoms", "nitrogen fixation", "metabolism"],
    },
    Chapter {
        number: 13,
        name: "Photosynthesis in Higher Plants",
        topics: &["light reaction", "dark reaction", "calvin cycle", "factors"],
    },
    Chapter {
        number: 14,
        name: "Respiration in Plants",
        topics: &["glycolysis", "krebs cycle", "electron transport", "fermentation"],
    },
];

const BIOLOGY_XII: &[Chapter] = &[
    Chapter {
        number: 15,
        name: "Reproduction in Organisms",
        topics: &["asexual reproduction", "sexual reproduction", "life cycles", "patterns"],
    },
    Chapter {
        number: 16,
        name: "Sexual Reproduction in Flowering Plants",
        topics: &["flower structure", "pollination", "fertilization", "embryo development"],
    },
    Chapter {
        number: 17,
        name: "Human Reproduction",
        topics: &["reproductive system", "gametogenesis", "fertilization", "pregnancy"],
    },
    Chapter {
        number: 18,
        name: "Reproductive Health",
        topics: &["contraception", "infertility", "sexually transmitted diseases", "population control"],
    },
    Chapter {
        number: 19,
        name: "Principles of Inheritance and Variation",
        topics: &["mendel laws", "inheritance patterns", "linkage", "recombination"],
    },
    Chapter {
        number: 20,
        name: "Molecular Basis of Inheritance",
        topics: &["dna structure", "replication", "transcription", "translation"],
    },
    Chapter {
        number: 21,
        name: "Evolution",
        topics: &["origin of life", "evolutionary theories", "evidence", "human evolution"],
    },
    Chapter {
        number: 22,
        name: "Human Health and Disease",
        topics: &["immunity", "pathogens", "diseases", "treatment"],
    },
    Chapter {
        number: 23,
        name: "Microbes in Human Welfare",
        topics: &["microorganisms", "industrial applications", "medicine", "environment"],
    },
    Chapter {
        number: 24,
        name: "Biotechnology - Principles and Processes",
        topics: &["genetic engineering", "tools", "techniques", "applications"],
    },
    Chapter {
        number: 25,
        name: "Biotechnology and its Applications",
        topics: &["agriculture", "medicine", "industry", "ethics"],
    },
    Chapter {
        number: 26,
        name: "Organisms and Populations",
        topics: &["ecology", "population dynamics", "community", "ecosystem"],
    },
    Chapter {
        number: 27,
        name: "Ecosystem",
        topics: &["energy flow", "nutrient cycling", "succession", "conservation"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_subject_has_both_levels() {
        let taxonomy = Taxonomy::builtin();
        for subject in Subject::ALL {
            for level in [Level::Lower, Level::Upper] {
                let shelf = taxonomy
                    .shelf(subject, level)
                    .unwrap_or_else(|| panic!("missing shelf for {subject:?} {level:?}"));
                assert!(!shelf.chapters.is_empty());
            }
        }
    }

    #[test]
    fn chapter_lookup_by_number() {
        let taxonomy = Taxonomy::builtin();
        let shelf = taxonomy
            .shelf(Subject::Chemistry, Level::Lower)
            .expect("chemistry XI shelf");
        let chapter = shelf.chapter(1).expect("chapter 1");
        assert_eq!(chapter.name, "Stoichiometry");
        assert!(chapter.topics.contains(&"mole concept"));
        assert!(shelf.chapter(99).is_none());
    }

    #[test]
    fn routes_resolve_to_shelves() {
        let taxonomy = Taxonomy::builtin();

        let shelf = taxonomy
            .shelf_for_route("/physicsxiibooks/ch17.html")
            .expect("physics XII route");
        assert_eq!(shelf.subject, Subject::Physics);
        assert_eq!(shelf.level, Level::Upper);

        assert!(taxonomy.shelf_for_route("/about.html").is_none());
    }

    #[test]
    fn upper_level_shelves_continue_chapter_numbering() {
        let taxonomy = Taxonomy::builtin();
        let physics_xii = taxonomy
            .shelf(Subject::Physics, Level::Upper)
            .expect("physics XII shelf");
        assert_eq!(physics_xii.chapters[0].number, 15);
    }
}
