//! Built-in substitution data.
//!
//! Entries are listed in dispatch order. A trigger that is a prefix of a later
//! trigger must come after it, otherwise the later entry can never match
//! (see [`SubstitutionTable::check`](crate::SubstitutionTable::check)).

/// `(text, command)` pairs for the built-in named symbols.
pub(crate) static NAMED: &[(&str, &str)] = &[
    (r"\", r"\\"),
    ("{", r"\{"),
    ("}", r"\}"),
    ("$", r"\$"),
    ("Α", r"\Alpha"),
    ("Β", r"\Beta"),
    ("Χ", r"\Chi"),
    ("Δ", r"\Delta"),
    ("Ε", r"\Epsilon"),
    ("Η", r"\Eta"),
    ("Γ", r"\Gamma"),
    ("Ͱ", r"\Heta"),
    ("Ι", r"\Iota"),
    ("Κ", r"\Kappa"),
    ("Λ", r"\Lambda"),
    ("Μ", r"\Mu"),
    ("Ν", r"\Nu"),
    ("Ω", r"\Omega"),
    ("Ο", r"\Omicron"),
    ("Φ", r"\Phi"),
    ("Π", r"\Pi"),
    ("Ψ", r"\Psi"),
    ("Ρ", r"\Rho"),
    ("Ϻ", r"\San"),
    ("Ϸ", r"\Sho"),
    ("Σ", r"\Sigma"),
    ("Τ", r"\Tau"),
    ("Θ", r"\Theta"),
    ("Υ", r"\Upsilon"),
    ("Ξ", r"\Xi"),
    ("Ϳ", r"\Yot"),
    ("Ζ", r"\Zeta"),
    ("α", r"\alpha"),
    ("β", r"\beta"),
    ("χ", r"\chi"),
    ("δ", r"\delta"),
    ("ϝ", r"\digamma"),
    ("ε", r"\epsilon"),
    ("η", r"\eta"),
    ("γ", r"\gamma"),
    ("ͱ", r"\heta"),
    ("ι", r"\iota"),
    ("κ", r"\kappa"),
    ("ϟ", r"\koppa"),
    ("λ", r"\lambda"),
    ("μ", r"\mu"),
    ("ν", r"\nu"),
    ("ω", r"\omega"),
    ("ο", r"\omicron"),
    ("φ", r"\phi"),
    ("π", r"\pi"),
    ("ψ", r"\psi"),
    ("ρ", r"\rho"),
    ("ϡ", r"\sampi"),
    ("ϻ", r"\san"),
    ("ϸ", r"\sho"),
    ("σ", r"\sigma"),
    ("ϛ", r"\stigma"),
    ("τ", r"\tau"),
    ("θ", r"\theta"),
    ("υ", r"\upsilon"),
    ("ξ", r"\xi"),
    ("ζ", r"\zeta"),
    ("∞", r"\infty"),
    ("∫", r"\int"),
    ("∈", r"\in"),
    ("∋", r"\ni"),
    ("∉", r"\notin"),
    ("∌", r"\notni"),
    ("×", r"\times"),
    ("¬", r"\neg"),
    ("∧", r"\wedge"),
    ("∨", r"\vee"),
    ("≡", r"\equiv"),
    ("≢", r"\nequiv"),
    ("∃", r"\exists"),
    ("∀", r"\forall"),
    ("√", r"\sqrt"),
    ("∅", r"\emptyset"),
    ("⟶", r"\ra"),
    ("⟶", r"\rightarrow"),
    ("≠", r"\neq"),
    ("≤", r"\leq"),
    ("≥", r"\geq"),
    ("°", r"^\circ"),
];

/// Italic letters; also the mapping active inside `$...$`.
pub(crate) const MATH_ITALIC: (&str, &str, &str) = (
    r"\mathit",
    "ΑΒΧΔΕΗΓΙΚΛΜΝΩΟΦΠΨΡΣΤΘΥΞΖαβχδεηγικλμνωοφπψρστθυξζabcdefgijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "𝛢𝛣𝛸𝛥𝛦𝛨𝛤𝛪𝛫𝛬𝛭𝛮𝛺𝛰𝛷𝛱𝛹𝛲𝛴𝛵𝛩𝛶𝛯𝛧𝛼𝛽𝜒𝛿𝜀𝜂𝛾𝜄𝜅𝜆𝜇𝜈𝜔𝜊𝜑𝜋𝜓𝜌𝜎𝜏𝜃𝜐𝜉𝜁𝑎𝑏𝑐𝑑𝑒𝑓𝑔𝑖𝑗𝑘𝑙𝑚𝑛𝑜𝑝𝑞𝑟𝑠𝑡𝑢𝑣𝑤𝑥𝑦𝑧𝐴𝐵𝐶𝐷𝐸𝐹𝐺𝐻𝐼𝐽𝐾𝐿𝑀𝑁𝑂𝑃𝑄𝑅𝑆𝑇𝑈𝑉𝑊𝑋𝑌𝑍",
);

/// `(command, origs, replacement)` triples for the built-in mappings.
pub(crate) static MAPPINGS: &[(&str, &str, &str)] = &[
    (
        "_",
        "0123456789+-=()aehijklmnoprstuvx?",
        "₀₁₂₃₄₅₆₇₈₉₊₋₌₍₎ₐₑₕᵢⱼₖₗₘₙₒₚᵣₛₜᵤᵥₓₔ",
    ),
    (
        "^",
        "0123456789+-=()niabcdefghijklmnoprstuvwxyz",
        "⁰¹²³⁴⁵⁶⁷⁸⁹⁺⁻⁼⁽⁾ⁿⁱᵃᵇᶜᵈᵉᶠᵍʰⁱʲᵏˡᵐⁿᵒᵖʳˢᵗᵘᵛʷˣʸᶻ",
    ),
    (
        r"\bb",
        "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789",
        "𝕒𝕓𝕔𝕕𝕖𝕗𝕘𝕙𝕚𝕛𝕜𝕝𝕞𝕟𝕠𝕡𝕢𝕣𝕤𝕥𝕦𝕧𝕨𝕩𝕪𝕫𝔸𝔹ℂ𝔻𝔼𝔽𝔾ℍ𝕀𝕁𝕂𝕃𝕄ℕ𝕆ℙℚℝ𝕊𝕋𝕌𝕍𝕎𝕏𝕐ℤ𝟘𝟙𝟚𝟛𝟜𝟝𝟞𝟟𝟠𝟡",
    ),
    (
        r"\mathbb",
        "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789",
        "𝕒𝕓𝕔𝕕𝕖𝕗𝕘𝕙𝕚𝕛𝕜𝕝𝕞𝕟𝕠𝕡𝕢𝕣𝕤𝕥𝕦𝕧𝕨𝕩𝕪𝕫𝔸𝔹ℂ𝔻𝔼𝔽𝔾ℍ𝕀𝕁𝕂𝕃𝕄ℕ𝕆ℙℚℝ𝕊𝕋𝕌𝕍𝕎𝕏𝕐ℤ𝟘𝟙𝟚𝟛𝟜𝟝𝟞𝟟𝟠𝟡",
    ),
    (
        r"\'",
        "AÆCEGIKLMNOPRSUWYZaæcegiklmnoprsuwyz",
        "ÁǼĆÉǴÍḰĹḾŃÓṔŔŚÚẂÝŹáǽćéǵíḱĺḿńóṕŕśúẃýź",
    ),
    (
        r"\`",
        "ИЕиеAEINOUWYaeinouwy",
        "ЍЀѝѐÀÈÌǸÒÙẀỲàèìǹòùẁỳ",
    ),
    (
        r#"\""#,
        "ͣͦͧАӨЧЭИОӘУЫЗЖаөчэиоәуызж‐AEHIOUWXYaehiotuwxy",
        "ᷲᷳᷴӒӪӴӬӤӦӚӰӸӞӜӓӫӵӭӥӧӛӱӹӟӝ⸚ÄËḦÏÖÜẄẌŸäëḧïöẗüẅẍÿ",
    ),
    (
        r"\^",
        "ACEGHIJOSUWYZaceghijosuwyz",
        "ÂĈÊĜĤÎĴÔŜÛŴŶẐâĉêĝĥîĵôŝûŵŷẑ",
    ),
    MATH_ITALIC,
    (
        r"\it",
        "ΑΒΧΔΕΗΓΙΚΛΜΝΩΟΦΠΨΡΣΤΘΥΞΖαβχδεηγικλμνωοφπψρστθυξζabcdefgijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ",
        "𝛢𝛣𝛸𝛥𝛦𝛨𝛤𝛪𝛫𝛬𝛭𝛮𝛺𝛰𝛷𝛱𝛹𝛲𝛴𝛵𝛩𝛶𝛯𝛧𝛼𝛽𝜒𝛿𝜀𝜂𝛾𝜄𝜅𝜆𝜇𝜈𝜔𝜊𝜑𝜋𝜓𝜌𝜎𝜏𝜃𝜐𝜉𝜁𝑎𝑏𝑐𝑑𝑒𝑓𝑔𝑖𝑗𝑘𝑙𝑚𝑛𝑜𝑝𝑞𝑟𝑠𝑡𝑢𝑣𝑤𝑥𝑦𝑧𝐴𝐵𝐶𝐷𝐸𝐹𝐺𝐻𝐼𝐽𝐾𝐿𝑀𝑁𝑂𝑃𝑄𝑅𝑆𝑇𝑈𝑉𝑊𝑋𝑌𝑍",
    ),
    (
        r"\mathbf",
        "ΑΒΧΔΕΗΓΙΚΛΜΝΩΟΦΠΨΡΣΤΘΥΞΖαβχδϝεηγικλμνωοφπψρστθυξζabcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ",
        "𝚨𝚩𝚾𝚫𝚬𝚮𝚪𝚰𝚱𝚲𝚳𝚴𝛀𝚶𝚽𝚷𝚿𝚸𝚺𝚻𝚯𝚼𝚵𝚭𝛂𝛃𝛘𝛅𝟋𝛆𝛈𝛄𝛊𝛋𝛌𝛍𝛎𝛚𝛐𝛗𝛑𝛙𝛒𝛔𝛕𝛉𝛖𝛏𝛇𝐚𝐛𝐜𝐝𝐞𝐟𝐠𝐡𝐢𝐣𝐤𝐥𝐦𝐧𝐨𝐩𝐪𝐫𝐬𝐭𝐮𝐯𝐰𝐱𝐲𝐳𝐀𝐁𝐂𝐃𝐄𝐅𝐆𝐇𝐈𝐉𝐊𝐋𝐌𝐍𝐎𝐏𝐐𝐑𝐒𝐓𝐔𝐕𝐖𝐗𝐘𝐙",
    ),
    (
        r"\bf",
        "ΑΒΧΔΕΗΓΙΚΛΜΝΩΟΦΠΨΡΣΤΘΥΞΖαβχδϝεηγικλμνωοφπψρστθυξζabcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ",
        "𝚨𝚩𝚾𝚫𝚬𝚮𝚪𝚰𝚱𝚲𝚳𝚴𝛀𝚶𝚽𝚷𝚿𝚸𝚺𝚻𝚯𝚼𝚵𝚭𝛂𝛃𝛘𝛅𝟋𝛆𝛈𝛄𝛊𝛋𝛌𝛍𝛎𝛚𝛐𝛗𝛑𝛙𝛒𝛔𝛕𝛉𝛖𝛏𝛇𝐚𝐛𝐜𝐝𝐞𝐟𝐠𝐡𝐢𝐣𝐤𝐥𝐦𝐧𝐨𝐩𝐪𝐫𝐬𝐭𝐮𝐯𝐰𝐱𝐲𝐳𝐀𝐁𝐂𝐃𝐄𝐅𝐆𝐇𝐈𝐉𝐊𝐋𝐌𝐍𝐎𝐏𝐐𝐑𝐒𝐓𝐔𝐕𝐖𝐗𝐘𝐙",
    ),
    (
        r"\mathcal",
        "abcdfhijklmnpqrstuvwxyzACDGJKNOPQSTUVWXYZ",
        "𝒶𝒷𝒸𝒹𝒻𝒽𝒾𝒿𝓀𝓁𝓂𝓃𝓅𝓆𝓇𝓈𝓉𝓊𝓋𝓌𝓍𝓎𝓏𝒜𝒞𝒟𝒢𝒥𝒦𝒩𝒪𝒫𝒬𝒮𝒯𝒰𝒱𝒲𝒳𝒴𝒵",
    ),
    (
        r"\cal",
        "abcdfhijklmnpqrstuvwxyzACDGJKNOPQSTUVWXYZ",
        "𝒶𝒷𝒸𝒹𝒻𝒽𝒾𝒿𝓀𝓁𝓂𝓃𝓅𝓆𝓇𝓈𝓉𝓊𝓋𝓌𝓍𝓎𝓏𝒜𝒞𝒟𝒢𝒥𝒦𝒩𝒪𝒫𝒬𝒮𝒯𝒰𝒱𝒲𝒳𝒴𝒵",
    ),
];
