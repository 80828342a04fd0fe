use anyhow::Result;
use osm_cleaner::constants::{NODES_FILE, NODE_TAGS_FILE, WAY_NODES_FILE, WAY_TAGS_FILE};
use osm_cleaner::pipeline::{process_file, PipelineOptions};
use osm_cleaner::storage::SqliteLoader;
use osm_cleaner::tags::CleanerRegistry;
use std::fs;
use tempfile::tempdir;

const JAKARTA_EXTRACT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<osm version="0.6" generator="CGImap 0.0.2">
  <bounds minlat="-6.3" minlon="106.7" maxlat="-6.1" maxlon="106.9"/>
  <node id="26609107" lat="-6.1753924" lon="106.8271528" user="ana" uid="1001" version="4" changeset="3001" timestamp="2015-03-01T10:00:00Z">
    <tag k="name" v="Monas"/>
    <tag k="addr:street" v="Jl. Medan Merdeka, Gambir"/>
    <tag k="addr:postcode" v="Jakarta 10110"/>
    <tag k="addr:city" v="Central Jakarta"/>
    <tag k="phone" v="(021) 384-0451"/>
  </node>
  <node id="26609108" lat="-6.2" lon="106.82" user="budi" uid="1002" version="1" changeset="3002" timestamp="2016-05-12T08:30:00Z"/>
  <way id="4000001" user="citra" uid="1003" version="2" changeset="3003" timestamp="2017-07-07T07:07:07Z">
    <nd ref="26609107"/>
    <nd ref="26609108"/>
    <tag k="highway" v="primary"/>
    <tag k="addr:street:name" v="Thamrin"/>
    <tag k="contact:phone" v="+62 21 555 0000"/>
    <tag k="addr:postcode" v="n/a"/>
  </way>
  <relation id="77" user="ana" uid="1001" version="1" changeset="3004" timestamp="2018-01-01T00:00:00Z">
    <member type="way" ref="4000001" role=""/>
    <tag k="type" v="route"/>
  </relation>
</osm>"#;

#[test]
fn test_shape_writes_cleaned_csv_files() -> Result<()> {
    let temp_dir = tempdir()?;
    let input = temp_dir.path().join("jakarta.osm");
    let output_dir = temp_dir.path().join("files");
    fs::write(&input, JAKARTA_EXTRACT)?;

    let options = PipelineOptions {
        validate: true,
        ..Default::default()
    };
    let report = process_file(&input, &output_dir, &CleanerRegistry::new(), &options)?;

    assert_eq!(report.nodes, 2);
    assert_eq!(report.ways, 1);
    assert_eq!(report.node_tags, 5);
    assert_eq!(report.way_tags, 4);
    assert_eq!(report.way_nodes, 2);
    // street, postcode, city and phone on the node; phone and postcode on the way
    assert_eq!(report.values_rewritten, 6);

    let node_tags = fs::read_to_string(output_dir.join(NODE_TAGS_FILE))?;
    assert_eq!(
        node_tags,
        "id,key,value,type\n\
         26609107,name,Monas,regular\n\
         26609107,street,Jalan Medan Merdeka,addr\n\
         26609107,postcode,10110,addr\n\
         26609107,city,Jakarta Pusat,addr\n\
         26609107,phone,0213840451,regular\n"
    );

    let way_tags = fs::read_to_string(output_dir.join(WAY_TAGS_FILE))?;
    assert!(way_tags.contains("4000001,street:name,Thamrin,addr\n"));
    assert!(way_tags.contains("4000001,phone,62215550000,contact\n"));
    assert!(way_tags.contains("4000001,postcode,00000,addr\n"));
    assert!(!way_tags.contains("route"));

    let way_nodes = fs::read_to_string(output_dir.join(WAY_NODES_FILE))?;
    assert_eq!(
        way_nodes,
        "id,node_id,position\n4000001,26609107,0\n4000001,26609108,1\n"
    );

    let nodes = fs::read_to_string(output_dir.join(NODES_FILE))?;
    assert_eq!(nodes.lines().count(), 3);

    Ok(())
}

#[test]
fn test_shaped_files_load_into_sqlite() -> Result<()> {
    let temp_dir = tempdir()?;
    let input = temp_dir.path().join("jakarta.osm");
    let output_dir = temp_dir.path().join("files");
    fs::write(&input, JAKARTA_EXTRACT)?;

    process_file(
        &input,
        &output_dir,
        &CleanerRegistry::new(),
        &PipelineOptions::default(),
    )?;

    let mut loader = SqliteLoader::open(temp_dir.path().join("db").join("osm.db"))?;
    let loaded = loader.load_dir(&output_dir)?;

    let counts: Vec<(&str, usize)> = loaded.iter().map(|(t, n)| (t.as_str(), *n)).collect();
    assert_eq!(
        counts,
        vec![
            ("node", 2),
            ("node_tags", 5),
            ("way", 1),
            ("way_tags", 4),
            ("way_nodes", 2),
        ]
    );

    let city: String = loader.connection().query_row(
        "SELECT value FROM node_tags WHERE key = 'city' AND type = 'addr'",
        [],
        |row| row.get(0),
    )?;
    assert_eq!(city, "Jakarta Pusat");

    let lat: f64 = loader.connection().query_row(
        "SELECT lat FROM node WHERE id = 26609107",
        [],
        |row| row.get(0),
    )?;
    assert!((lat - -6.1753924).abs() < 1e-9);

    let positions: i64 = loader.connection().query_row(
        "SELECT SUM(position) FROM way_nodes WHERE id = 4000001",
        [],
        |row| row.get(0),
    )?;
    assert_eq!(positions, 1);

    Ok(())
}

#[test]
fn test_limit_caps_processed_elements() -> Result<()> {
    let temp_dir = tempdir()?;
    let input = temp_dir.path().join("jakarta.osm");
    fs::write(&input, JAKARTA_EXTRACT)?;

    let options = PipelineOptions {
        limit: Some(1),
        ..Default::default()
    };
    let report = process_file(
        &input,
        &temp_dir.path().join("files"),
        &CleanerRegistry::new(),
        &options,
    )?;

    assert_eq!(report.nodes, 1);
    assert_eq!(report.ways, 0);
    Ok(())
}
