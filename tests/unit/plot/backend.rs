use super::*;

#[derive(Default)]
struct MockBackend {
    calls: Vec<String>,
    canvas: Option<Canvas>,
}

impl PlotBackend for MockBackend {
    fn begin(&mut self, canvas: Canvas, _clear: Rgba8) -> PathvizResult<()> {
        self.calls.push("begin".to_string());
        self.canvas = Some(canvas);
        Ok(())
    }

    fn draw(&mut self, op: &DrawOp) -> PathvizResult<()> {
        self.calls.push(format!("draw z={}", op.z()));
        Ok(())
    }

    fn finish(&mut self) -> PathvizResult<FrameRGBA> {
        self.calls.push("finish".to_string());
        let canvas = self.canvas.unwrap();
        Ok(FrameRGBA {
            width: canvas.width,
            height: canvas.height,
            data: vec![0; (canvas.width * canvas.height * 4) as usize],
            premultiplied: true,
        })
    }
}

#[test]
fn execute_scene_calls_in_expected_order() {
    let scene = Scene {
        canvas: Canvas::new(4, 3).unwrap(),
        clear: Rgba8::rgb(255, 255, 255),
        ops: vec![
            DrawOp::Polyline {
                points: vec![kurbo::Point::new(0.0, 0.0), kurbo::Point::new(3.0, 2.0)],
                width: 1.0,
                color: Rgba8::rgb(0, 0, 0),
                closed: false,
                z: 10,
            },
            DrawOp::Markers {
                points: vec![kurbo::Point::new(1.0, 1.0)],
                radius: 1.0,
                color: Rgba8::rgb(0, 0, 0),
                z: 40,
            },
        ],
    };

    let mut backend = MockBackend::default();
    let frame = execute_scene(&mut backend, &scene).unwrap();
    assert_eq!((frame.width, frame.height), (4, 3));
    assert_eq!(
        backend.calls,
        vec!["begin", "draw z=10", "draw z=40", "finish"]
    );
}

#[test]
fn pixel_lookup_is_bounds_checked() {
    let frame = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![1, 2, 3, 4, 5, 6, 7, 8],
        premultiplied: false,
    };
    assert_eq!(frame.pixel(1, 0), Some([5, 6, 7, 8]));
    assert_eq!(frame.pixel(2, 0), None);
    assert_eq!(frame.pixel(0, 1), None);
}

#[test]
fn straight_conversion_undoes_premultiplication() {
    let frame = FrameRGBA {
        width: 3,
        height: 1,
        data: vec![50, 25, 100, 128, 10, 20, 30, 255, 0, 0, 0, 0],
        premultiplied: true,
    };
    let straight = frame.to_straight_rgba8();
    assert_eq!(&straight[4..], &[10, 20, 30, 255, 0, 0, 0, 0]);
    assert_eq!(straight[3], 128);
    assert!((i32::from(straight[0]) - 100).abs() <= 1);
    assert!((i32::from(straight[1]) - 50).abs() <= 1);
    assert!((i32::from(straight[2]) - 199).abs() <= 1);

    let plain = FrameRGBA {
        premultiplied: false,
        ..frame.clone()
    };
    assert_eq!(plain.to_straight_rgba8(), plain.data);
}
