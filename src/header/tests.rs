use super::*;

#[test]
fn test_uniprot_header() {
    let header = Header::parse(">sp|P60709|ACTB_HUMAN Actin, cytoplasmic 1 OS=Homo sapiens");
    assert_eq!(header.database_type, DatabaseType::UniProt);
    assert_eq!(header.accession, "P60709");
    assert_eq!(header.description, "ACTB_HUMAN Actin, cytoplasmic 1 OS=Homo sapiens");
    assert_eq!(header.accession_or_rest(), "P60709");
    assert_eq!(header.location(), None);

    let trembl = Header::parse(">tr|Q9XYZ1|Q9XYZ1_MOUSE Uncharacterized protein");
    assert_eq!(trembl.database_type, DatabaseType::UniProt);
    assert_eq!(trembl.accession, "Q9XYZ1");
}

#[test]
fn test_legacy_swissprot_header() {
    let header = Header::parse(">sw|P12345 (1-120)|ACTB_HUMAN Actin");
    assert_eq!(header.database_type, DatabaseType::SwissProt);
    assert_eq!(header.accession, "P12345");
    assert_eq!(header.location(), Some((1, 120)));
    assert_eq!(header.description, "ACTB_HUMAN Actin");
}

#[test]
fn test_ncbi_header() {
    let header = Header::parse(">gi|4557757|ref|NP_000240.1| mutL homolog 1 [Homo sapiens]");
    assert_eq!(header.database_type, DatabaseType::Ncbi);
    assert_eq!(header.accession, "4557757");
    assert_eq!(header.description, "mutL homolog 1 [Homo sapiens]");

    let short = Header::parse(">gi|12345 hypothetical protein");
    assert_eq!(short.database_type, DatabaseType::Ncbi);
    assert_eq!(short.accession, "12345");
    assert_eq!(short.description, "hypothetical protein");
}

#[test]
fn test_ipi_header() {
    let header = Header::parse(">IPI:IPI00000001.2|SWISS-PROT:O95793-1|REFSEQ:NP_059347 Tax_Id=9606");
    assert_eq!(header.database_type, DatabaseType::Ipi);
    assert_eq!(header.accession, "IPI00000001.2");
    assert!(header.description.starts_with("SWISS-PROT:O95793-1"));
}

#[test]
fn test_generic_header_with_location() {
    let header = Header::parse(">ENSP00000354587 (100-240) Some protein");
    assert_eq!(header.database_type, DatabaseType::Generic);
    assert_eq!(header.accession, "ENSP00000354587");
    assert_eq!(header.start, Some(100));
    assert_eq!(header.end, Some(240));
    assert_eq!(header.description, "Some protein");
}

#[test]
fn test_generic_header_without_location() {
    let header = Header::parse(">NP0465 (NP0465) A description for this protein.");
    assert_eq!(header.database_type, DatabaseType::Generic);
    assert_eq!(header.accession, "NP0465");
    assert_eq!(header.location(), None);
    assert_eq!(header.description, "(NP0465) A description for this protein.");
}

#[test]
fn test_malformed_prefix_falls_back_to_generic() {
    let header = Header::parse(">sp|missing_second_pipe description");
    assert_eq!(header.database_type, DatabaseType::Generic);
    assert_eq!(header.accession, "sp|missing_second_pipe");
}

#[test]
fn test_addenda_are_split_off() {
    let header = Header::parse(">P12345 first entry^A>P67890 second entry");
    assert_eq!(header.accession, "P12345");
    assert_eq!(header.description, "first entry");
    assert_eq!(header.addenda.as_deref(), Some("^A>P67890 second entry"));
}

#[test]
fn test_raw_line_is_trimmed_and_kept() {
    let header = Header::parse("  >P1 desc \r");
    assert_eq!(header.raw_line, ">P1 desc");
    assert_eq!(header.rest(), "P1 desc");
    assert_eq!(header.to_string(), ">P1 desc");
}

#[test]
fn test_bare_marker_is_total() {
    let header = Header::parse(">");
    assert_eq!(header.accession, "");
    assert_eq!(header.accession_or_rest(), "");
    assert_eq!(header.description, "");
}

#[test]
fn test_h_invitational_header() {
    let header = Header::parse(
        ">HIT000000001.10|HIX0021591.10|AB002292.2|NO|NO|HC|cds 185..4219|DH domain containing protein.",
    );
    assert_eq!(header.database_type, DatabaseType::HInvitational);
    assert_eq!(header.accession, "HIT000000001.10");
    assert!(header.description.starts_with("HIX0021591.10|"));
}

#[test]
fn test_tuberculosis_header() {
    let header = Header::parse(">M. tub.H37Rv|Rv0001| dnaA chromosomal replication initiator");
    assert_eq!(header.database_type, DatabaseType::Tuberculosis);
    assert_eq!(header.accession, "Rv0001");
    assert_eq!(header.description, "dnaA chromosomal replication initiator");
}

#[test]
fn test_drosophila_headers() {
    let peptide = Header::parse(">CG1234-PA pep:known chromosome:BDGP5:2L:1-100:1");
    assert_eq!(peptide.database_type, DatabaseType::Drosophila);
    assert_eq!(peptide.accession, "CG1234-PA");
    assert_eq!(peptide.description, "pep:known chromosome:BDGP5:2L:1-100:1");

    let genome = Header::parse(">dm345_3L-sense [234353534-234353938]");
    assert_eq!(genome.database_type, DatabaseType::Drosophila);
    assert_eq!(genome.accession, "dm345_3L-sense");
    assert_eq!(genome.location(), Some((234_353_534, 234_353_938)));

    let no_brackets = Header::parse(">dmel_gene something");
    assert_eq!(no_brackets.database_type, DatabaseType::Generic);
}

#[test]
fn test_arabidopsis_headers() {
    let tair = Header::parse(
        ">AT1G08520.1 | Symbol: PDE166 | magnesium-chelatase subunit chlD | chr1:2696415-2700961 FORWARD | Aliases: T27G7.20",
    );
    assert_eq!(tair.database_type, DatabaseType::Arabidopsis);
    assert_eq!(tair.accession, "AT1G08520.1");
    assert_eq!(tair.description, "magnesium-chelatase subunit chlD");

    let psb = Header::parse(">nrAt0.2_1 \t(TR:Q8HT11_ARATH) Photosystem II CP43 protein (Fragment).");
    assert_eq!(psb.database_type, DatabaseType::Arabidopsis);
    assert_eq!(psb.accession, "TR:Q8HT11_ARATH");
    assert_eq!(psb.description, "Photosystem II CP43 protein (Fragment).");

    let located = Header::parse(">nrAt0.2_1 \t(TR:Q8HT11_ARATH (12-40)) Photosystem II");
    assert_eq!(located.accession, "TR:Q8HT11_ARATH");
    assert_eq!(located.location(), Some((12, 40)));
    assert_eq!(located.description, "Photosystem II");
}

#[test]
fn test_prefix_style_headers_use_generic_location() {
    let halobacterium = Header::parse(">OE1234F (12-250) hypothetical protein");
    assert_eq!(halobacterium.database_type, DatabaseType::Generic);
    assert_eq!(halobacterium.accession, "OE1234F");
    assert_eq!(halobacterium.location(), Some((12, 250)));
    assert_eq!(halobacterium.description, "hypothetical protein");
}
