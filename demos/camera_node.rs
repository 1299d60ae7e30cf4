//! In-process camera node
//!
//! Run with: cargo run --example camera_node
//!
//! Registers one camera with two streams, then plays a ground station's
//! side of a short session against it:
//!
//! 1. Probe and request camera information
//! 2. Request information for every stream
//! 3. Start every stream, let them run for a second
//! 4. Stop every stream
//!
//! Every outbound message is printed as it leaves the camera. Set
//! `RUST_LOG=mavcam=trace` to also see the per-frame worker output.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use mavcam::media::{camera_cap_flags, MediaCapsInfo, MediaComponent, StreamInfo, VideoStreamType, Worker};
use mavcam::protocol::constants::*;
use mavcam::protocol::{CommandLong, Message};
use mavcam::router::{ChannelSink, RouteSystem, SparseAddress};
use mavcam::scheduler::TokioScheduler;
use mavcam::{VideoServer, VideoServerConfig};

const GROUND_STATION: SparseAddress = SparseAddress {
    group_id: 255,
    instance_id: 190,
};

fn counting_worker(frames: Arc<AtomicU64>) -> Worker {
    Arc::new(move |info: &StreamInfo| {
        let n = frames.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::trace!(stream = %info.name, frame = n, "Frame produced");
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mavcam=info".parse()?)
                .add_directive("camera_node=info".parse()?),
        )
        .init();

    let (sink, mut outbound) = ChannelSink::new();
    let route = Arc::new(RouteSystem::new(1, Arc::new(sink)));

    tokio::spawn(async move {
        while let Some(packet) = outbound.recv().await {
            println!(
                "[{} -> {}] {:?}",
                packet.component_id, packet.target, packet.message
            );
        }
    });

    let scheduler = Arc::new(TokioScheduler::current().ok_or("no tokio runtime")?);
    let caps = MediaCapsInfo {
        time_boot_ms: 12,
        vendor_name: "mavcam".into(),
        model_name: "demo".into(),
        resolution_h: 1280,
        resolution_v: 720,
        flags: camera_cap_flags::HAS_VIDEO_STREAM,
        ..Default::default()
    };

    let main_frames = Arc::new(AtomicU64::new(0));
    let thermal_frames = Arc::new(AtomicU64::new(0));

    let mut camera = MediaComponent::new(caps, scheduler.clone());
    camera
        .register_stream(
            StreamInfo::new("main", "rtsp://127.0.0.1:8554/main")
                .framerate(30.0)
                .resolution(1280, 720)
                .bitrate(2_000_000),
            Some(counting_worker(main_frames.clone())),
        )
        .ok_or("invalid main stream")?;
    camera
        .register_stream(
            StreamInfo::new("thermal", "udp://127.0.0.1:5600")
                .stream_type(VideoStreamType::RtpUdp)
                .framerate(9.0)
                .resolution(320, 240),
            Some(counting_worker(thermal_frames.clone())),
        )
        .ok_or("invalid thermal stream")?;

    let mut server = VideoServer::new(VideoServerConfig::default());
    server.init(route.clone())?;
    let camera_id = server.add_media_component(camera)?;
    server.start()?;

    tracing::info!(component = camera_id, "Camera node ready");

    let session = [
        CommandLong::new(1, camera_id, MAV_CMD_REQUEST_CAMERA_INFORMATION),
        CommandLong::new(1, camera_id, MAV_CMD_REQUEST_CAMERA_INFORMATION).with_param1(1.0),
        CommandLong::new(1, camera_id, MAV_CMD_REQUEST_VIDEO_STREAM_INFORMATION),
        CommandLong::new(1, camera_id, MAV_CMD_VIDEO_START_STREAMING),
    ];
    for cmd in session {
        route.dispatch(Message::CommandLong(cmd), GROUND_STATION).await;
    }

    tokio::time::sleep(Duration::from_secs(1)).await;

    let stop = CommandLong::new(1, camera_id, MAV_CMD_VIDEO_STOP_STREAMING);
    route.dispatch(Message::CommandLong(stop), GROUND_STATION).await;

    tracing::info!(
        main = main_frames.load(Ordering::Relaxed),
        thermal = thermal_frames.load(Ordering::Relaxed),
        "Frames produced"
    );

    drop(server);
    // Let the printer drain
    tokio::time::sleep(Duration::from_millis(50)).await;
    Ok(())
}
