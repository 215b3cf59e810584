use packed_bits::BitArray;

fn reverse_line(array: &BitArray<u8>) -> String {
    let mut line = String::with_capacity(array.len());
    let mut cursor = array.rbegin();
    while cursor != array.rend() {
        line.push(if cursor.current() { '1' } else { '0' });
        cursor.move_next();
    }
    line
}

fn main() {
    let mut array = BitArray::<u8>::new(24);
    array.set_all();

    for i in 0..array.len() {
        array.clear(i);
        println!("{}", reverse_line(&array));
        array.set(i);
    }

    for i in (0..array.len()).rev() {
        array.clear(i);
        println!("{}", reverse_line(&array));
        array.set(i);
    }
}
