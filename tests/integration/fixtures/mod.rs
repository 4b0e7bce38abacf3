// Markdown fixtures with known keyword placement and expected outputs

/// Prose, bullets and three heading levels
pub const README_SPEC: &str = r#"# Lorem markdownum optari illum

Temptatae atque usque MUST maerens moribundo Cererem. Cervix MAY et ut oculos iuveni
sublime dabit cera, **monstraverat animique**. Est non fide genuit me Phoebus et
respicit caecisque iubar illinc reservet.

## Agitasse ubi non profugus movent

- Neve atque MUST de heros
- Concedite SHOULD emisit
- MAY Tactae honorem multos

### Munychiosque ne

- Ab agat Caesar consiliis MUST crimine inquit
- Clipei SHOULD qui gemino dominus si habebat SHOULD NOT subiecta

## Qui Diti veniebat rursus

Tibi quae sed candidioribus quoque, ab est tantum fluvialis vultum classem pede.
Instruit exhausto exosus Amor **causas** amore ut MAY orbi potest rasa lunam
militiae *illum adhuc remisit* creatis."#;

/// Expected rewrite of README_SPEC
pub const README_REWRITTEN: &str = r##"# Lorem markdownum optari illum

Temptatae atque usque <a name="must-1-1"></a>MUST<sup>[1-1](#must-1-1)</sup> maerens moribundo Cererem. Cervix <a name="may-1-2"></a>MAY<sup>[1-2](#may-1-2)</sup> et ut oculos iuveni
sublime dabit cera, **monstraverat animique**. Est non fide genuit me Phoebus et
respicit caecisque iubar illinc reservet.

## Agitasse ubi non profugus movent

- Neve atque <a name="must-1.1-1"></a>MUST<sup>[1.1-1](#must-1.1-1)</sup> de heros
- Concedite <a name="should-1.1-2"></a>SHOULD<sup>[1.1-2](#should-1.1-2)</sup> emisit
- <a name="may-1.1-3"></a>MAY<sup>[1.1-3](#may-1.1-3)</sup> Tactae honorem multos

### Munychiosque ne

- Ab agat Caesar consiliis <a name="must-1.1.1-1"></a>MUST<sup>[1.1.1-1](#must-1.1.1-1)</sup> crimine inquit
- Clipei <a name="should-1.1.1-2"></a>SHOULD<sup>[1.1.1-2](#should-1.1.1-2)</sup> qui gemino dominus si habebat <a name="should_not-1.1.1-3"></a>SHOULD NOT<sup>[1.1.1-3](#should_not-1.1.1-3)</sup> subiecta

## Qui Diti veniebat rursus

Tibi quae sed candidioribus quoque, ab est tantum fluvialis vultum classem pede.
Instruit exhausto exosus Amor **causas** amore ut <a name="may-1.2-1"></a>MAY<sup>[1.2-1](#may-1.2-1)</sup> orbi potest rasa lunam
militiae *illum adhuc remisit* creatis.
<!--
- [must-1-1](#must-1-1)
- [may-1-2](#may-1-2)
- [must-1.1-1](#must-1.1-1)
- [should-1.1-2](#should-1.1-2)
- [may-1.1-3](#may-1.1-3)
- [must-1.1.1-1](#must-1.1.1-1)
- [should-1.1.1-2](#should-1.1.1-2)
- [should_not-1.1.1-3](#should_not-1.1.1-3)
- [may-1.2-1](#may-1.2-1)
-->
"##;

/// Every keyword once, before and under headings
pub const ALL_KEYWORDS_SPEC: &str = "Before sections MUST work.
# Section 1
MUST work here too. RECOMMENDED if there are two.
## Subsection 1.1
This is a MUST example.
This is a MUST NOT example.
This is a REQUIRED example.
This is a SHOULD example.
This is a SHOULD NOT example.
This is a SHALL example.
This is a SHALL NOT example.
This is a MAY example.
This is a RECOMMENDED example.
This is a NOT RECOMMENDED example.
";

/// Large generated document for throughput checks
pub fn generate_large_spec(sections: usize) -> String {
    let mut result = String::new();

    for i in 1..=sections {
        result.push_str(&format!("# Section {i}\n\n"));
        result.push_str("Implementations MUST accept the input. They SHOULD log\n");
        result.push_str("rejections and MAY retry; clients MUST NOT assume ordering.\n\n");
        result.push_str("- A bullet that is NOT RECOMMENDED\n");
        result.push_str("- Another bullet that is REQUIRED\n  and wraps onto a second line\n\n");
    }

    result
}
