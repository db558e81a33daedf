//! Example: Analyzing and rendering a programmatically built concept map
//!
//! This example demonstrates how to build a concept map with the model types
//! directly, without parsing a JSON scheme, then run it through the pipeline.

use conmap::{Concept, ConceptMap, MapPipeline, Relation};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building concept map from model types...\n");

    // Create concepts (the nodes of the map)
    let ada = Concept::new("ada", "person", "Ada Lovelace")
        .with_property("born", "1815")
        .with_property("field", "mathematics");

    let babbage = Concept::new("babbage", "person", "Charles Babbage");

    let engine = Concept::new("engine", "machine", "Analytical Engine")
        .with_property("status", "never completed");

    // Create relations (the edges of the map)
    let wrote_for = Relation::new("ada", "wrote_programs_for", "engine");
    let designed = Relation::new("babbage", "designed", "engine");
    let corresponded =
        Relation::new("ada", "corresponded_with", "babbage").with_property("years", "1833-1852");

    let map = ConceptMap::new()
        .with_concept(ada)
        .with_concept(babbage)
        .with_concept(engine)
        .with_relation(wrote_for)
        .with_relation(designed)
        .with_relation(corresponded);

    // Print map info
    println!("Created concept map:");
    println!("  Concepts: {}", map.concepts.len());
    println!("  Relations: {}", map.relations.len());
    println!();

    // Summarize the structure
    println!("Analyzing structure...");
    let pipeline = MapPipeline::default();
    let summary = pipeline.analyze(&map)?;

    println!("  Components: {}", summary.disconnected_component_count);
    println!("  Lonely concepts: {}", summary.lonely_node_count);
    println!("  Average degree: {:.2}", summary.avg_degree);
    println!("  Maximum degree: {}", summary.max_degree);
    println!();

    // Render the map to DOT text
    println!("Rendering to DOT...");
    let dot = pipeline.render_dot(&map);

    println!("DOT generated successfully!");
    println!("DOT length: {} bytes", dot.len());

    // Write to file
    let output_path = "from_scheme_output.gv";
    std::fs::write(output_path, &dot)?;
    println!("DOT written to: {}", output_path);

    Ok(())
}
