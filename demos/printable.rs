use dec_vte::{Actor, CsiParam, Parser};

#[derive(Default)]
struct MyActor;

impl Actor for MyActor {
    fn print(&mut self, text: &[char]) {
        let text: String = text.iter().collect();
        println!("print: {text:?}");
    }

    fn execute(&mut self, byte: u8) {
        println!("exec: {byte:#04x}");
    }

    fn hook(&mut self, byte: u8, params: &[i64], intermediates: &[u8], ignore_flagged: bool) {
        println!(
            "DCS hook: final={byte:#04x} params={params:?} intermediates={intermediates:?} ignore_flagged={ignore_flagged}"
        );
    }

    fn put(&mut self, byte: u8) {
        println!("DCS put: {byte:#04x}");
    }

    fn unhook(&mut self) {
        println!("DCS unhook");
    }

    fn osc_start(&mut self) {
        println!("OSC start");
    }

    fn osc_put(&mut self, byte: u8) {
        println!("OSC put: {byte:#04x}");
    }

    fn osc_end(&mut self) {
        println!("OSC end");
    }

    fn csi_dispatch(
        &mut self,
        params: &[i64],
        raw_params: &[CsiParam],
        intermediates: &[u8],
        ignore_flagged: bool,
        byte: u8,
    ) {
        println!(
            "CSI: params={params:?} raw_params={raw_params:?} intermediates={intermediates:?} ignore_flagged={ignore_flagged} final={byte:#04x}"
        );
    }

    fn esc_dispatch(&mut self, params: &[i64], intermediates: &[u8], ignore_flagged: bool, byte: u8) {
        println!(
            "ESC: params={params:?} intermediates={intermediates:?} ignore_flagged={ignore_flagged} final={byte:#04x}"
        );
    }
}

fn main() {
    let mut parser = Parser::new();
    let mut actor = MyActor::default();
    parser.feed_bytes(b"\x1b[31mhi\x1b[0m", &mut actor);
}
