use divan::{AllocProfiler, Bencher, black_box_drop};
use workbench_codec::{Kind, decode, encode};

#[global_allocator]
static ALLOC: AllocProfiler = AllocProfiler::system();

fn main() {
    divan::main();
}

const SAMPLE: &str = "The quick brown fox jumps over the lazy dog — \
                      héllo wörld, 日本語, !@#$%^&*()";

mod encoding {
    use super::*;

    #[divan::bench(args = Kind::ALL, min_time = 0.250)]
    fn encode_sample(bencher: Bencher, kind: Kind) {
        bencher
            .with_inputs(|| SAMPLE.to_string())
            .bench_local_refs(|text| black_box_drop(encode(text, kind)));
    }
}

mod decoding {
    use super::*;

    #[divan::bench(args = Kind::ALL, min_time = 0.250)]
    fn decode_sample(bencher: Bencher, kind: Kind) {
        bencher
            .with_inputs(|| encode(SAMPLE, kind))
            .bench_local_refs(|text| black_box_drop(decode(text, kind).unwrap()));
    }
}
