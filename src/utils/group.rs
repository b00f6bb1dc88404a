use std::collections::HashMap;
use std::hash::Hash;

/// Group `items` by `key`, keeping groups in the order their key first
/// appears and items in their original order within a group.
pub fn group_by<'a, T, K, F>(items: &'a [T], key: F) -> Vec<(K, Vec<&'a T>)>
where
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<&'a T>)> = Vec::new();

    for item in items {
        let k = key(item);
        match positions.get(&k) {
            Some(&position) => groups[position].1.push(item),
            None => {
                positions.insert(k.clone(), groups.len());
                groups.push((k, vec![item]));
            }
        }
    }

    groups
}
