use super::*;

fn job() -> AutoReplyJob {
    AutoReplyJob {
        channel_id: Uuid::new_v4(),
        content: "@ai".to_string(),
    }
}

/// Tests submitting to a full queue and to a queue whose worker is gone.
///
/// Expected: jobs beyond capacity and jobs after the receiver is dropped are refused
#[tokio::test]
async fn drops_jobs_when_full_or_closed() {
    let (queue, mut receiver) = ResponderQueue::channel(1);

    assert!(queue.submit(job()));
    assert!(!queue.submit(job()));

    assert!(receiver.recv().await.is_some());
    assert!(queue.submit(job()));

    drop(receiver);
    assert!(!queue.submit(job()));
}

/// Tests the worker loop end to end.
///
/// Expected: a submitted job is answered and the loop ends once the queue is dropped
#[tokio::test]
async fn worker_drains_queue_until_closed() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, channel) = factory::helpers::create_channel_with_dependencies(db).await?;
    factory::profile::create_profile_named(db, AI_USERNAME).await?;
    let worker = ResponderWorker::new(
        db.clone(),
        Some(Arc::new(StubCompletion::replying(Some("pong")))),
        AI_USERNAME.to_string(),
        None,
    );

    let (queue, receiver) = ResponderQueue::channel(4);
    assert!(queue.submit(AutoReplyJob {
        channel_id: channel.id,
        content: "@ai ping".to_string(),
    }));
    drop(queue);

    worker.run(receiver).await;

    let messages = MessageRepository::new(db)
        .get_latest_by_channel(channel.id, 10)
        .await?;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].content, "pong");

    Ok(())
}
