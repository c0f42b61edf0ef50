use ordtree_core::{OrderedTree, TreeConfig};

fn main() {
    println!("Ordered Tree Demo\n");

    let config = TreeConfig::new(3);
    let mut tree: OrderedTree<String> = config.build();
    println!("Created tree with degree={}", tree.degree());

    println!("Inserting elements...");
    for token in ["m", "d", "t", "a", "g", "p", "x", "b"] {
        match tree.insert(token.to_string()) {
            Ok(()) => println!("  Inserted {}", token),
            Err(e) => println!("  {}: {}", token, e),
        }
    }
    println!("Length: {}, height: {}\n", tree.len(), tree.height());
    print!("{}", tree);

    println!("\nDuplicate insert:");
    if let Err(e) = tree.insert("g".to_string()) {
        println!("  g: {}", e);
    }

    println!("\nDelete operations:");
    for token in ["a", "t", "z"] {
        match tree.delete(&token.to_string()) {
            Ok(()) => println!("  Deleted {}", token),
            Err(e) => println!("  {}: {}", token, e),
        }
    }
    println!();
    print!("{}", tree.render());

    let tokens: Vec<_> = tree.iter().collect();
    println!("\nIn order: {:?}", tokens);
}
