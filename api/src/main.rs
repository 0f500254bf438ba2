fn main() {
    blog_api::main();
}
