use crate::core_modules::error::{DecoderError, DecoderResult};
use crate::pipeline::{DecodeRequest, DecoderConfig, DecoderPipeline, Report};
use futures::future::join_all;
use tokio::sync::{mpsc, oneshot};
use tracing::debug;

pub struct DecodeTask {
    pub request_id: u64,
    pub request: DecodeRequest,
    pub result_sender: oneshot::Sender<DecoderResult<Report>>,
}

/// A fixed set of tokio tasks, fed round-robin by a single dispatcher.
pub struct WorkerPool {
    task_sender: mpsc::UnboundedSender<DecodeTask>,
    workers: Vec<tokio::task::JoinHandle<()>>,
}

impl WorkerPool {
    /// Spawns the dispatcher and `config.worker_count` workers (at least one).
    /// Must be called from within a tokio runtime.
    pub fn new(config: DecoderConfig) -> Self {
        let worker_count = config.worker_count.max(1);
        let (task_sender, mut task_receiver) = mpsc::unbounded_channel::<DecodeTask>();
        let mut workers = Vec::with_capacity(worker_count);

        let (worker_senders, worker_receivers): (Vec<_>, Vec<_>) = (0..worker_count)
            .map(|_| mpsc::unbounded_channel::<DecodeTask>())
            .unzip();

        // Spawn dispatcher
        tokio::spawn(async move {
            let mut worker_idx = 0;
            while let Some(task) = task_receiver.recv().await {
                let _ = worker_senders[worker_idx].send(task);
                worker_idx = (worker_idx + 1) % worker_count;
            }
        });

        // Spawn workers
        for (worker_id, mut worker_receiver) in worker_receivers.into_iter().enumerate() {
            let pipeline = DecoderPipeline::new(config.clone());

            let worker = tokio::spawn(async move {
                while let Some(task) = worker_receiver.recv().await {
                    debug!(worker_id, request_id = task.request_id, "decoding request");
                    let result = pipeline.decode(&task.request);
                    let _ = task.result_sender.send(result);
                }
            });

            workers.push(worker);
        }

        Self {
            task_sender,
            workers,
        }
    }

    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    pub async fn submit(&self, request_id: u64, request: DecodeRequest) -> DecoderResult<Report> {
        let (result_sender, result_receiver) = oneshot::channel();

        let task = DecodeTask {
            request_id,
            request,
            result_sender,
        };

        self.task_sender
            .send(task)
            .map_err(|_| DecoderError::WorkerUnavailable("failed to send task to worker pool"))?;

        result_receiver
            .await
            .map_err(|_| DecoderError::WorkerUnavailable("failed to receive result from worker"))?
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        for worker in &self.workers {
            worker.abort();
        }
    }
}

/// Decodes many independent requests concurrently.
pub struct ParallelDecoder {
    worker_pool: WorkerPool,
}

impl ParallelDecoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self {
            worker_pool: WorkerPool::new(config),
        }
    }

    pub fn worker_count(&self) -> usize {
        self.worker_pool.worker_count()
    }

    pub async fn decode(&self, request: DecodeRequest) -> DecoderResult<Report> {
        self.worker_pool.submit(0, request).await
    }

    /// Results come back in the same order as `requests`.
    pub async fn decode_batch(&self, requests: Vec<DecodeRequest>) -> Vec<DecoderResult<Report>> {
        let pending = requests
            .into_iter()
            .enumerate()
            .map(|(i, request)| self.worker_pool.submit(i as u64, request));
        join_all(pending).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_modules::pixel_grid::PixelGrid;
    use crate::core_modules::sample::sample::Sample;
    use crate::pipeline::Category;

    fn config(worker_count: usize) -> DecoderConfig {
        DecoderConfig {
            worker_count,
            ..DecoderConfig::default()
        }
    }

    fn disk(radius: i64) -> PixelGrid {
        PixelGrid::from_fn(100, 100, |x, y| {
            let (dx, dy) = (x as i64 - 50, y as i64 - 50);
            if dx * dx + dy * dy <= radius * radius { Sample::BLACK } else { Sample::WHITE }
        })
    }

    #[tokio::test]
    async fn batch_preserves_order() {
        let decoder = ParallelDecoder::new(config(3));
        assert_eq!(decoder.worker_count(), 3);

        let requests = vec![
            DecodeRequest::Grid(disk(30)),
            DecodeRequest::Grid(PixelGrid::filled(100, 20, Sample::BLACK)),
            DecodeRequest::Preset("libra".into()),
            DecodeRequest::Grid(PixelGrid::filled(50, 50, Sample::WHITE)),
            DecodeRequest::Grid(disk(35)),
        ];
        let results = decoder.decode_batch(requests).await;
        assert_eq!(results.len(), 5);

        let categories: Vec<Option<Category>> = results
            .iter()
            .map(|r| r.as_ref().ok().and_then(Report::category))
            .collect();
        assert_eq!(categories[0], Some(Category::RadialDivergence));
        assert_eq!(categories[1], Some(Category::LinearAnisotropic));
        assert_eq!(results[2].as_ref().map(Report::name).ok(), Some("Libra (Scales)"));
        assert!(results[3].as_ref().is_err_and(DecoderError::is_insufficient_features));
        assert_eq!(categories[4], Some(Category::RadialDivergence));
    }

    #[tokio::test]
    async fn parallel_matches_sequential() {
        let decoder = ParallelDecoder::new(config(2));
        let sequential = DecoderPipeline::new(config(2));
        for radius in [20, 25, 30, 40] {
            let request = DecodeRequest::Grid(disk(radius));
            let expected = sequential.decode(&request).expect("disk decodes");
            let actual = decoder.decode(request).await.expect("disk decodes");
            assert_eq!(actual, expected);
        }
    }

    #[tokio::test]
    async fn zero_workers_still_gets_one() {
        let decoder = ParallelDecoder::new(config(0));
        assert_eq!(decoder.worker_count(), 1);
        let report = decoder
            .decode(DecodeRequest::Preset("torus".into()))
            .await
            .expect("preset exists");
        assert_eq!(report.name(), "Torus");
    }
}
