use string_queue::collections::linked::StringQueue;

fn main() {
    println!("\n[StringQueue]\n");

    let mut queue = StringQueue::new();
    for value in ["item10", "item2", "item1"] {
        if let Err(error) = queue.insert_tail(value) {
            eprintln!("{error}");
            return;
        }
        println!("{queue}");
    }

    queue.reverse();
    println!("reversed: {queue}");

    queue.sort();
    println!("sorted: {queue}");

    let mut buffer = [0_u8; 4];
    while let Ok(written) = queue.remove_head(Some(&mut buffer[..])) {
        println!("removed {:?}, {:?}", String::from_utf8_lossy(&buffer[..written]), queue);
    }
}
