//! Examples of using the string trie
use string_trie::{Error, Trie};

fn main() -> Result<(), Error> {
    let mut trie = Trie::new();

    // Insert some values
    trie.insert("cat", 1)?;
    trie.insert("car", 2)?;
    trie.insert("cart", 3)?;

    // Check values
    assert_eq!(trie.lookup("car")?, &2);
    assert_eq!(trie.get_or_default("dog", &0), &0);
    assert_eq!(trie.lookup(""), Err(Error::InvalidKey));

    println!("keys under \"ca\": {:?}", trie.keys_with_prefix("ca"));
    println!("longest prefix of \"cartoon\": {:?}", trie.longest_prefix_of("cartoon"));

    // Deleting prunes the branch that only "cart" used
    trie.delete("cart")?;
    println!("after deleting \"cart\": {:?} ({} keys)", trie.keys(), trie.len());

    for (key, value) in trie.view_subtrie("ca").iter() {
        println!("  {} -> {}", key, value);
    }

    Ok(())
}
