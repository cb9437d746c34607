use super::{DatabaseType, Header};

/// Accession/description split produced by one of the layout rules
struct Fields<'a> {
    database_type: DatabaseType,
    accession: &'a str,
    description: &'a str,
    /// Location found outside the accession field, e.g. `[start-end]`
    location: Option<(u32, u32)>,
}

impl<'a> Fields<'a> {
    fn new(database_type: DatabaseType, accession: &'a str, description: &'a str) -> Self {
        Self {
            database_type,
            accession,
            description,
            location: None,
        }
    }
}

pub(super) fn parse_header(line: &str) -> Header {
    let raw_line = line.trim().to_string();

    let mut text = raw_line.strip_prefix('>').unwrap_or(&raw_line);
    let mut addenda = None;
    if let Some(pos) = text.find("^A") {
        addenda = Some(text[pos..].to_string());
        text = &text[..pos];
    }
    let text = text.trim();

    let fields = parse_uniprot(text)
        .or_else(|| parse_swissprot(text))
        .or_else(|| parse_ncbi(text))
        .or_else(|| parse_ipi(text))
        .or_else(|| parse_h_invitational(text))
        .or_else(|| parse_tuberculosis(text))
        .or_else(|| parse_drosophila_peptide(text))
        .or_else(|| parse_drosophila_genome(text))
        .or_else(|| parse_tair(text))
        .or_else(|| parse_psb(text))
        .unwrap_or_else(|| parse_generic(text));

    let (accession, location) = split_accession_location(fields.accession);
    let (accession, description, location) = match location.or(fields.location) {
        Some(loc) => (accession, fields.description, Some(loc)),
        None if fields.database_type == DatabaseType::Generic => {
            match parse_location(fields.description) {
                Some((loc, remainder)) => (accession, remainder, Some(loc)),
                None => (accession, fields.description, None),
            }
        }
        None => (accession, fields.description, None),
    };

    Header {
        database_type: fields.database_type,
        accession: accession.to_string(),
        description: description.trim().to_string(),
        start: location.map(|(start, _)| start),
        end: location.map(|(_, end)| end),
        addenda,
        raw_line,
    }
}

/// `sp|ACC|ENTRY desc` and `tr|ACC|ENTRY desc`
fn parse_uniprot(text: &str) -> Option<Fields<'_>> {
    let body = text
        .strip_prefix("sp|")
        .or_else(|| text.strip_prefix("tr|"))?;
    let (accession, description) = body.split_once('|')?;
    if !is_token(accession) {
        return None;
    }
    Some(Fields::new(DatabaseType::UniProt, accession, description))
}

/// `sw|ACC|description`
fn parse_swissprot(text: &str) -> Option<Fields<'_>> {
    let body = text
        .strip_prefix("sw|")
        .or_else(|| text.strip_prefix("SW|"))?;
    let (accession, description) = body.split_once('|')?;
    if accession.trim().is_empty() {
        return None;
    }
    Some(Fields::new(DatabaseType::SwissProt, accession.trim(), description))
}

/// `gi|NUM|db|foreign_acc| description` or `gi|NUM description`
fn parse_ncbi(text: &str) -> Option<Fields<'_>> {
    let body = text
        .strip_prefix("gi|")
        .or_else(|| text.strip_prefix("GI|"))?;
    let (accession, description) = match body.split_once('|') {
        Some((accession, tail)) => {
            let description = tail.rsplit_once('|').map_or(tail, |(_, last)| last);
            (accession, description)
        }
        None => split_first_token(body),
    };
    if !is_token(accession) {
        return None;
    }
    Some(Fields::new(DatabaseType::Ncbi, accession, description))
}

/// `IPI:IPI00000001.2|...` or `ipi|IPI00000001|...`
fn parse_ipi(text: &str) -> Option<Fields<'_>> {
    let body = ["IPI:", "ipi:", "IPI|", "ipi|"]
        .iter()
        .find_map(|prefix| text.strip_prefix(prefix))?;
    let (accession, description) = body
        .split_once('|')
        .unwrap_or_else(|| split_first_token(body));
    if !is_token(accession) {
        return None;
    }
    Some(Fields::new(DatabaseType::Ipi, accession, description))
}

/// `HIT000000001.10|HIX0021591.10|AB002292.2|NO|NO|HC|cds 185..4219|description`
fn parse_h_invitational(text: &str) -> Option<Fields<'_>> {
    if !text.starts_with("HIT") {
        return None;
    }
    let (accession, description) = text.split_once('|')?;
    Some(Fields::new(DatabaseType::HInvitational, accession, description))
}

/// `M. tub.H37Rv|Rv0001|description`
fn parse_tuberculosis(text: &str) -> Option<Fields<'_>> {
    let (_, rest) = text.strip_prefix("M. tub.")?.split_once('|')?;
    let (accession, description) = rest.split_once('|')?;
    let accession = accession.trim();
    if accession.is_empty() {
        return None;
    }
    Some(Fields::new(DatabaseType::Tuberculosis, accession, description))
}

/// `CG1234-PA pep:known chromosome:...`; the description keeps `pep:`
fn parse_drosophila_peptide(text: &str) -> Option<Fields<'_>> {
    if !text.starts_with("CG") {
        return None;
    }
    let pos = text.find(" pep:")?;
    Some(Fields::new(DatabaseType::Drosophila, text[..pos].trim(), &text[pos..]))
}

/// `dm345_3L-sense [234353534-234353938]`, nucleotide location in brackets
fn parse_drosophila_genome(text: &str) -> Option<Fields<'_>> {
    if !text.starts_with("dm") {
        return None;
    }
    let (accession, description) = split_first_token(text);
    let open = description.find('[')?;
    let close = open + description[open..].find(']')?;
    let (start, end) = description[open + 1..close].rsplit_once('-')?;
    let location = (start.trim().parse().ok()?, end.trim().parse().ok()?);
    Some(Fields {
        location: Some(location),
        ..Fields::new(DatabaseType::Drosophila, accession, description)
    })
}

/// `AT1G08520.1 | Symbol: PDE166 | description | chr1:2696415-2700961 FORWARD | Aliases: ...`
fn parse_tair(text: &str) -> Option<Fields<'_>> {
    let parts: Vec<&str> = text.split('|').collect();
    if parts.len() != 5
        || !parts[0].ends_with(' ')
        || !parts[1].starts_with(' ')
        || parts[0].contains('\t')
    {
        return None;
    }
    let accession = parts[0].trim();
    if accession.is_empty() {
        return None;
    }
    Some(Fields::new(DatabaseType::Arabidopsis, accession, parts[2]))
}

/// `nrAt0.2_1<TAB>(TR:Q8HT11_ARATH) description`, accession in parentheses
fn parse_psb(text: &str) -> Option<Fields<'_>> {
    if !text.starts_with("nrAt") || !text.contains('\t') {
        return None;
    }
    let open = text.find('(')?;
    let mut close = open + text[open..].find(')')?;
    // `(ACC (12-40))` closes twice
    if text[close + 1..].starts_with(')') {
        close += 1;
    }
    let accession = text[open + 1..close].trim();
    if accession.is_empty() {
        return None;
    }
    Some(Fields::new(DatabaseType::Arabidopsis, accession, &text[close + 1..]))
}

fn parse_generic(text: &str) -> Fields<'_> {
    let (accession, description) = split_first_token(text);
    Fields::new(DatabaseType::Generic, accession, description)
}

fn split_first_token(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.find(char::is_whitespace) {
        Some(pos) => (&text[..pos], &text[pos..]),
        None => (text, ""),
    }
}

fn is_token(s: &str) -> bool {
    !s.is_empty() && !s.contains(char::is_whitespace)
}

/// Split `ACC (12-240)` into `ACC` and the location
fn split_accession_location(field: &str) -> (&str, Option<(u32, u32)>) {
    let field = field.trim();
    if let Some(pos) = field.find(" (") {
        if let Some((loc, remainder)) = parse_location(&field[pos..]) {
            if remainder.trim().is_empty() {
                return (field[..pos].trim_end(), Some(loc));
            }
        }
    }
    (field, None)
}

/// Parse a leading `(start-end)` and return the text after it
fn parse_location(text: &str) -> Option<((u32, u32), &str)> {
    let text = text.trim_start();
    let inner_end = text.find(')')?;
    let inner = text.strip_prefix('(')?.get(..inner_end - 1)?;
    let (start, end) = inner.split_once('-')?;
    let start = start.trim().parse().ok()?;
    let end = end.trim().parse().ok()?;
    Some(((start, end), &text[inner_end + 1..]))
}
