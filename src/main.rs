fn main() {
    grin::term::main()
}
